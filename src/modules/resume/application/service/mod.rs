mod generate_resume_service;

pub use generate_resume_service::GenerateResumeService;

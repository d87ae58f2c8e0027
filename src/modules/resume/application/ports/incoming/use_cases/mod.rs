mod generate_resume;

pub use generate_resume::{GenerateResumeError, GenerateResumeUseCase, ResumeFile};

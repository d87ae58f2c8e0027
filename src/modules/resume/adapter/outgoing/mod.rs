mod printpdf_writer;
mod resume_source_queries;

pub use printpdf_writer::PrintPdfWriter;
pub use resume_source_queries::ResumeSourceQueries;

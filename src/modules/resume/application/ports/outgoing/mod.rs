mod document_writer;
mod resume_source;

pub use document_writer::{DocumentWriter, DocumentWriterError};
pub use resume_source::{ResumeSource, ResumeSourceError};

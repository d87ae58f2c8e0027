use async_trait::async_trait;

use crate::modules::resume::application::ports::outgoing::{
    DocumentWriterError, ResumeSourceError,
};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A rendered résumé ready to stream back as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn pdf(filename: String, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            content_type: PDF_CONTENT_TYPE,
            bytes,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateResumeError {
    #[error("Failed to load resume content: {0}")]
    SourceFailed(String),

    #[error("Failed to render resume: {0}")]
    RenderFailed(String),
}

impl From<ResumeSourceError> for GenerateResumeError {
    fn from(err: ResumeSourceError) -> Self {
        GenerateResumeError::SourceFailed(err.to_string())
    }
}

impl From<DocumentWriterError> for GenerateResumeError {
    fn from(err: DocumentWriterError) -> Self {
        GenerateResumeError::RenderFailed(err.to_string())
    }
}

#[async_trait]
pub trait GenerateResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumeFile, GenerateResumeError>;
}

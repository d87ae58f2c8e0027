use crate::modules::resume::application::domain::PlacedPage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentWriterError {
    #[error("Font error: {0}")]
    Font(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Turns laid-out pages into file bytes. Synchronous and CPU-bound.
pub trait DocumentWriter: Send + Sync {
    fn write(&self, pages: &[PlacedPage], title: &str) -> Result<Vec<u8>, DocumentWriterError>;
}

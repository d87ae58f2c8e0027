use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Stores the message unread.
    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;
}

use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactNotifierError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify_new_message(
        &self,
        recipient: &str,
        message: &ContactMessage,
    ) -> Result<(), ContactNotifierError>;
}

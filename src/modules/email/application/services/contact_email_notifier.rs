use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError,
};
use crate::modules::email::application::ports::outgoing::EmailSender;

/// Sends the site owner a plain-text copy of each contact message.
#[derive(Clone)]
pub struct ContactEmailNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for ContactEmailNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailNotifier")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl ContactEmailNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    pub fn subject_for(message: &ContactMessage) -> String {
        format!("New Contact Message: {}", message.subject)
    }

    pub fn body_for(message: &ContactMessage) -> String {
        format!(
            "New message from your portfolio website:\n\n\
             Name: {}\n\
             Email: {}\n\
             Subject: {}\n\
             Message: {}\n",
            message.name, message.email, message.subject, message.message
        )
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailNotifier {
    async fn notify_new_message(
        &self,
        recipient: &str,
        message: &ContactMessage,
    ) -> Result<(), ContactNotifierError> {
        self.sender
            .send_email(
                recipient,
                &Self::subject_for(message),
                &Self::body_for(message),
            )
            .await
            .map_err(|e| ContactNotifierError::DeliveryFailed(e.to_string()))
    }
}

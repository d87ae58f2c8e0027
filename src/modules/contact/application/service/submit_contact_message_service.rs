use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactMessageRepository, ContactNotifier,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct SubmitContactMessageService<R, Q, N>
where
    R: ContactMessageRepository,
    Q: ProfileQuery,
    N: ContactNotifier,
{
    repository: R,
    settings: Q,
    notifier: N,
}

impl<R, Q, N> SubmitContactMessageService<R, Q, N>
where
    R: ContactMessageRepository,
    Q: ProfileQuery,
    N: ContactNotifier,
{
    pub fn new(repository: R, settings: Q, notifier: N) -> Self {
        Self {
            repository,
            settings,
            notifier,
        }
    }

    /// Best effort. Failures are logged and swallowed.
    async fn notify(&self, message: &ContactMessage) {
        let settings = match self.settings.get_site_settings().await {
            Ok(Some(settings)) => settings,
            Ok(None) => return,
            Err(e) => {
                warn!("Skipping contact notification, settings unavailable: {}", e);
                return;
            }
        };

        let Some(recipient) = settings.notification_address() else {
            return;
        };

        if let Err(e) = self.notifier.notify_new_message(recipient, message).await {
            warn!("Contact notification for {} failed: {}", message.id, e);
        }
    }
}

#[async_trait]
impl<R, Q, N> SubmitContactMessageUseCase for SubmitContactMessageService<R, Q, N>
where
    R: ContactMessageRepository + Send + Sync,
    Q: ProfileQuery + Send + Sync,
    N: ContactNotifier + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        let stored = self.repository.insert(command.into_message()).await?;
        info!("Stored contact message {}", stored.id);

        self.notify(&stored).await;

        Ok(stored)
    }
}

mod contact_message_repository;
mod contact_notifier;

pub use contact_message_repository::{ContactMessageRepository, ContactMessageRepositoryError};
pub use contact_notifier::{ContactNotifier, ContactNotifierError};

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::outgoing::ContactMessageRepositoryError;

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 254;
const SUBJECT_MAX: usize = 200;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactMessageCommandError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactMessageCommand {
    message: NewContactMessage,
}

impl SubmitContactMessageCommand {
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, SubmitContactMessageCommandError> {
        let name = bounded("name", name, NAME_MAX)?;
        let email = bounded("email", email, EMAIL_MAX)?;
        let subject = bounded("subject", subject, SUBJECT_MAX)?;
        let message = required("message", message)?;

        if !EmailAddress::is_valid(&email) {
            return Err(SubmitContactMessageCommandError::InvalidEmail);
        }

        Ok(Self {
            message: NewContactMessage {
                name,
                email,
                subject,
                message,
            },
        })
    }

    pub fn message(&self) -> &NewContactMessage {
        &self.message
    }

    pub fn into_message(self) -> NewContactMessage {
        self.message
    }
}

fn required(field: &'static str, value: &str) -> Result<String, SubmitContactMessageCommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SubmitContactMessageCommandError::Missing(field));
    }
    Ok(value.to_string())
}

fn bounded(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, SubmitContactMessageCommandError> {
    let value = required(field, value)?;
    if value.chars().count() > max {
        return Err(SubmitContactMessageCommandError::TooLong { field, max });
    }
    Ok(value)
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactMessageRepositoryError> for SubmitContactMessageError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        SubmitContactMessageError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_every_field() {
        let cmd = SubmitContactMessageCommand::new(
            "  Ada  ",
            " ada@example.com ",
            "  Hello ",
            "\n Let's talk \n",
        )
        .unwrap();

        let msg = cmd.message();
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.subject, "Hello");
        assert_eq!(msg.message, "Let's talk");
    }

    #[test]
    fn empty_message_is_rejected() {
        assert_eq!(
            SubmitContactMessageCommand::new("Ada", "ada@example.com", "Hi", "   "),
            Err(SubmitContactMessageCommandError::Missing("message"))
        );
    }

    #[test]
    fn invalid_email_is_rejected() {
        assert_eq!(
            SubmitContactMessageCommand::new("Ada", "not-an-email", "Hi", "Hello"),
            Err(SubmitContactMessageCommandError::InvalidEmail)
        );
    }

    #[test]
    fn name_length_is_counted_in_characters() {
        let at_limit = "é".repeat(NAME_MAX);
        assert!(SubmitContactMessageCommand::new(&at_limit, "a@b.co", "Hi", "Hello").is_ok());

        let over = "é".repeat(NAME_MAX + 1);
        assert_eq!(
            SubmitContactMessageCommand::new(&over, "a@b.co", "Hi", "Hello"),
            Err(SubmitContactMessageCommandError::TooLong {
                field: "name",
                max: NAME_MAX
            })
        );
    }

    #[test]
    fn overlong_subject_is_rejected() {
        let subject = "s".repeat(SUBJECT_MAX + 1);

        assert!(matches!(
            SubmitContactMessageCommand::new("Ada", "ada@example.com", &subject, "Hello"),
            Err(SubmitContactMessageCommandError::TooLong { field: "subject", .. })
        ));
    }

    #[test]
    fn overlong_email_is_rejected() {
        let email = format!("{}@example.com", "a".repeat(EMAIL_MAX));

        assert!(matches!(
            SubmitContactMessageCommand::new("Ada", &email, "Hi", "Hello"),
            Err(SubmitContactMessageCommandError::TooLong { field: "email", .. })
        ));
    }
}

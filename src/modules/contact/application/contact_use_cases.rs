use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
}

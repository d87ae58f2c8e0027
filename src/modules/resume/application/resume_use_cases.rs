use std::sync::Arc;

use crate::modules::resume::application::ports::incoming::use_cases::GenerateResumeUseCase;

#[derive(Clone)]
pub struct ResumeUseCases {
    pub generate: Arc<dyn GenerateResumeUseCase + Send + Sync>,
}

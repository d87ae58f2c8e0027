use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailUseCase, GetProjectsUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetProjectDetailUseCase + Send + Sync>,
}

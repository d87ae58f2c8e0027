use std::sync::Arc;

use crate::modules::overview::application::ports::incoming::use_cases::{
    GetAboutUseCase, GetHomeUseCase,
};

#[derive(Clone)]
pub struct OverviewUseCases {
    pub get_home: Arc<dyn GetHomeUseCase + Send + Sync>,
    pub get_about: Arc<dyn GetAboutUseCase + Send + Sync>,
}

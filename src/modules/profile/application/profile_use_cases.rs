use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetContactPageUseCase, UpdateProfileStatsUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_contact_page: Arc<dyn GetContactPageUseCase + Send + Sync>,
    pub update_stats: Arc<dyn UpdateProfileStatsUseCase + Send + Sync>,
}

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::profile::application::domain::{ContactInfo, ProfileStats, SiteSettings};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQueryError, ProfileRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactPage {
    pub contact_info: Option<ContactInfo>,
    pub stats: Option<ProfileStats>,
    pub site_settings: SiteSettings,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactPageError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProfileQueryError> for GetContactPageError {
    fn from(err: ProfileQueryError) -> Self {
        GetContactPageError::QueryFailed(err.to_string())
    }
}

impl From<ProfileRepositoryError> for GetContactPageError {
    fn from(err: ProfileRepositoryError) -> Self {
        GetContactPageError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetContactPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactPage, GetContactPageError>;
}

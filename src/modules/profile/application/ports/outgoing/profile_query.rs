use async_trait::async_trait;

use crate::modules::profile::application::domain::{
    ContactInfo, Hobby, Profile, ProfileStats, SiteSettings,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-side access to the singleton rows and hobbies.
///
/// Singleton getters return `None` when the row was never created; they
/// never create it.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn get_profile(&self) -> Result<Option<Profile>, ProfileQueryError>;

    async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ProfileQueryError>;

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, ProfileQueryError>;

    async fn get_stats(&self) -> Result<Option<ProfileStats>, ProfileQueryError>;

    /// Ordered by display_order, then name.
    async fn list_hobbies(&self, limit: Option<u64>) -> Result<Vec<Hobby>, ProfileQueryError>;
}

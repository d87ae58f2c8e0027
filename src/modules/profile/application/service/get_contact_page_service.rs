use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    ContactPage, GetContactPageError, GetContactPageUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileRepository};

pub struct GetContactPageService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> GetContactPageService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> GetContactPageUseCase for GetContactPageService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ContactPage, GetContactPageError> {
        let site_settings = self.repository.ensure_site_settings().await?;
        let contact_info = self.query.get_contact_info().await?;
        let stats = self.query.get_stats().await?;

        Ok(ContactPage {
            contact_info,
            stats,
            site_settings,
        })
    }
}

use async_trait::async_trait;

use crate::modules::overview::application::ports::incoming::use_cases::{
    GetHomeUseCase, HomePage, OverviewError,
};
use crate::modules::overview::application::service::OverviewSources;
use crate::modules::project::application::ports::outgoing::{ProjectListFilter, ProjectSort};

const FEATURED_PROJECTS: u64 = 6;
const FEATURED_SKILLS: u64 = 12;
const FEATURED_ACHIEVEMENTS: u64 = 6;
const HOBBIES: u64 = 6;
const CURRENT_EXPERIENCE: u64 = 3;
const FEATURED_CERTIFICATIONS: u64 = 4;

pub struct GetHomeService {
    sources: OverviewSources,
}

impl GetHomeService {
    pub fn new(sources: OverviewSources) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl GetHomeUseCase for GetHomeService {
    async fn execute(&self) -> Result<HomePage, OverviewError> {
        let s = &self.sources;

        let (
            profile,
            site_settings,
            stats,
            current_education,
            featured_projects,
            featured_skills,
            featured_achievements,
            hobbies,
            current_experience,
            featured_certifications,
        ) = tokio::try_join!(
            async { Ok::<_, OverviewError>(s.profile.get_profile().await?) },
            async { Ok(s.profile_repository.ensure_site_settings().await?) },
            async { Ok(s.profile.get_stats().await?) },
            async { Ok(s.career.current_education().await?) },
            async {
                Ok(s.projects
                    .list(
                        ProjectListFilter::featured(Some(FEATURED_PROJECTS)),
                        ProjectSort::Showcase,
                    )
                    .await?)
            },
            async { Ok(s.skills.list_featured(FEATURED_SKILLS).await?) },
            async { Ok(s.achievements.list_featured(Some(FEATURED_ACHIEVEMENTS)).await?) },
            async { Ok(s.profile.list_hobbies(Some(HOBBIES)).await?) },
            async { Ok(s.career.list_current_experience(CURRENT_EXPERIENCE).await?) },
            async {
                Ok(s.career
                    .list_featured_certifications(Some(FEATURED_CERTIFICATIONS))
                    .await?)
            },
        )?;

        Ok(HomePage {
            profile,
            site_settings,
            stats,
            current_education,
            featured_projects,
            featured_skills,
            featured_achievements,
            hobbies,
            current_experience,
            featured_certifications,
        })
    }
}

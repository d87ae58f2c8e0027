use async_trait::async_trait;

use crate::modules::overview::application::ports::incoming::use_cases::{
    AboutPage, GetAboutUseCase, OverviewError,
};
use crate::modules::overview::application::service::OverviewSources;
use crate::modules::skill::application::domain::group_by_category;

pub struct GetAboutService {
    sources: OverviewSources,
}

impl GetAboutService {
    pub fn new(sources: OverviewSources) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl GetAboutUseCase for GetAboutService {
    async fn execute(&self) -> Result<AboutPage, OverviewError> {
        let s = &self.sources;

        let (profile, education, skills, achievements, experience, certifications, hobbies) = tokio::try_join!(
            async { Ok::<_, OverviewError>(s.profile.get_profile().await?) },
            async { Ok(s.career.list_education().await?) },
            async { Ok(s.skills.list_all().await?) },
            async { Ok(s.achievements.list_all().await?) },
            async { Ok(s.career.list_experience().await?) },
            async { Ok(s.career.list_certifications().await?) },
            async { Ok(s.profile.list_hobbies(None).await?) },
        )?;

        Ok(AboutPage {
            profile,
            education,
            skill_groups: group_by_category(skills),
            achievements,
            experience,
            certifications,
            hobbies,
        })
    }
}

use std::sync::Arc;

use actix_web::web;

use crate::modules::achievement::application::achievement_use_cases::AchievementUseCases;
use crate::modules::achievement::application::ports::incoming::use_cases::GetAchievementsUseCase;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::overview::application::overview_use_cases::OverviewUseCases;
use crate::modules::overview::application::ports::incoming::use_cases::{
    AboutPage, GetAboutUseCase, GetHomeUseCase,
};
use crate::modules::profile::application::domain::SiteSettings;
use crate::modules::profile::application::ports::incoming::use_cases::{
    ContactPage, GetContactPageUseCase, UpdateProfileStatsUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailUseCase, GetProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::resume::application::ports::incoming::use_cases::{
    GenerateResumeError, GenerateResumeUseCase,
};
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsByCategoryUseCase, GetSkillsUseCase, SkillsByCategory,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::fixtures::empty_home_page;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case defaults to an empty success, except project detail
/// (not found) and résumé generation (render failure).
pub struct TestAppStateBuilder {
    skill: SkillUseCases,
    profile: ProfileUseCases,
    project: ProjectUseCases,
    achievement: AchievementUseCases,
    overview: OverviewUseCases,
    contact: ContactUseCases,
    resume: ResumeUseCases,
}

fn empty_about_page() -> AboutPage {
    AboutPage {
        profile: None,
        education: vec![],
        skill_groups: vec![],
        achievements: vec![],
        experience: vec![],
        certifications: vec![],
        hobbies: vec![],
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            skill: SkillUseCases {
                get_list: Arc::new(StubGetSkillsUseCase::success(vec![])),
                get_grouped: Arc::new(StubGetSkillsByCategoryUseCase::success(
                    SkillsByCategory {
                        groups: vec![],
                        highest_proficiency: None,
                        total_skills: 0,
                    },
                )),
            },
            profile: ProfileUseCases {
                get_contact_page: Arc::new(StubGetContactPageUseCase::success(ContactPage {
                    contact_info: None,
                    stats: None,
                    site_settings: SiteSettings::default(),
                })),
                update_stats: Arc::new(StubUpdateProfileStatsUseCase::success(
                    Default::default(),
                )),
            },
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase::success(vec![])),
                get_detail: Arc::new(StubGetProjectDetailUseCase::not_found()),
            },
            achievement: AchievementUseCases {
                get_list: Arc::new(StubGetAchievementsUseCase::success(vec![])),
            },
            overview: OverviewUseCases {
                get_home: Arc::new(StubGetHomeUseCase::success(empty_home_page())),
                get_about: Arc::new(StubGetAboutUseCase::success(empty_about_page())),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactMessageUseCase::success()),
            },
            resume: ResumeUseCases {
                generate: Arc::new(StubGenerateResumeUseCase::error(
                    GenerateResumeError::RenderFailed("not used in this test".to_string()),
                )),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_skills_by_category(
        mut self,
        uc: impl GetSkillsByCategoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.skill.get_grouped = Arc::new(uc);
        self
    }

    pub fn with_get_contact_page(
        mut self,
        uc: impl GetContactPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_contact_page = Arc::new(uc);
        self
    }

    /// Takes an `Arc` so the test keeps a handle for call assertions.
    pub fn with_update_profile_stats_arc(
        mut self,
        uc: Arc<dyn UpdateProfileStatsUseCase + Send + Sync>,
    ) -> Self {
        self.profile.update_stats = uc;
        self
    }

    pub fn with_get_projects_arc(mut self, uc: Arc<dyn GetProjectsUseCase + Send + Sync>) -> Self {
        self.project.get_list = uc;
        self
    }

    pub fn with_get_project_detail(
        mut self,
        uc: impl GetProjectDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_detail = Arc::new(uc);
        self
    }

    pub fn with_get_achievements(
        mut self,
        uc: impl GetAchievementsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.achievement.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_home(mut self, uc: impl GetHomeUseCase + Send + Sync + 'static) -> Self {
        self.overview.get_home = Arc::new(uc);
        self
    }

    pub fn with_get_about(mut self, uc: impl GetAboutUseCase + Send + Sync + 'static) -> Self {
        self.overview.get_about = Arc::new(uc);
        self
    }

    pub fn with_submit_contact_message_arc(
        mut self,
        uc: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    ) -> Self {
        self.contact.submit = uc;
        self
    }

    pub fn with_generate_resume(
        mut self,
        uc: impl GenerateResumeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resume.generate = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            skill: self.skill,
            profile: self.profile,
            project: self.project,
            achievement: self.achievement,
            overview: self.overview,
            contact: self.contact,
            resume: self.resume,
        })
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::achievement::application::ports::incoming::use_cases::{
    GetAchievementsError, GetAchievementsUseCase,
};
use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::overview::application::ports::incoming::use_cases::{
    AboutPage, GetAboutUseCase, GetHomeUseCase, HomePage, OverviewError,
};
use crate::modules::profile::application::domain::ProfileStats;
use crate::modules::profile::application::ports::incoming::use_cases::{
    ContactPage, GetContactPageError, GetContactPageUseCase, UpdateProfileStatsCommand,
    UpdateProfileStatsError, UpdateProfileStatsUseCase,
};
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase, GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectListFilter;
use crate::modules::resume::application::ports::incoming::use_cases::{
    GenerateResumeError, GenerateResumeUseCase, ResumeFile,
};
use crate::modules::skill::application::domain::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsByCategoryUseCase, GetSkillsError, GetSkillsUseCase, SkillsByCategory,
};

// ============================================================================
// Skills
// ============================================================================

#[derive(Clone)]
pub struct StubGetSkillsUseCase {
    result: Result<Vec<Skill>, GetSkillsError>,
}

impl StubGetSkillsUseCase {
    pub fn success(data: Vec<Skill>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn error(err: GetSkillsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<Vec<Skill>, GetSkillsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSkillsByCategoryUseCase {
    result: Result<SkillsByCategory, GetSkillsError>,
}

impl StubGetSkillsByCategoryUseCase {
    pub fn success(data: SkillsByCategory) -> Self {
        Self { result: Ok(data) }
    }

    pub fn error(err: GetSkillsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetSkillsByCategoryUseCase for StubGetSkillsByCategoryUseCase {
    async fn execute(&self) -> Result<SkillsByCategory, GetSkillsError> {
        self.result.clone()
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone)]
pub struct StubGetContactPageUseCase {
    result: Result<ContactPage, GetContactPageError>,
}

impl StubGetContactPageUseCase {
    pub fn success(page: ContactPage) -> Self {
        Self { result: Ok(page) }
    }

    pub fn error(err: GetContactPageError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetContactPageUseCase for StubGetContactPageUseCase {
    async fn execute(&self) -> Result<ContactPage, GetContactPageError> {
        self.result.clone()
    }
}

/// Counts calls so tests can assert validation short-circuits.
pub struct StubUpdateProfileStatsUseCase {
    result: Result<ProfileStats, UpdateProfileStatsError>,
    calls: AtomicUsize,
}

impl StubUpdateProfileStatsUseCase {
    pub fn success(stats: ProfileStats) -> Self {
        Self {
            result: Ok(stats),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn error(err: UpdateProfileStatsError) -> Self {
        Self {
            result: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpdateProfileStatsUseCase for StubUpdateProfileStatsUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileStatsCommand,
    ) -> Result<ProfileStats, UpdateProfileStatsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ============================================================================
// Projects
// ============================================================================

pub struct StubGetProjectsUseCase {
    result: Result<Vec<Project>, GetProjectsError>,
    last_filter: Mutex<Option<ProjectListFilter>>,
}

impl StubGetProjectsUseCase {
    pub fn success(data: Vec<Project>) -> Self {
        Self {
            result: Ok(data),
            last_filter: Mutex::new(None),
        }
    }

    pub fn error(err: GetProjectsError) -> Self {
        Self {
            result: Err(err),
            last_filter: Mutex::new(None),
        }
    }

    pub fn last_filter(&self) -> Option<ProjectListFilter> {
        self.last_filter.lock().unwrap().clone()
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        *self.last_filter.lock().unwrap() = Some(filter);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjectDetailUseCase {
    result: Result<Project, GetProjectDetailError>,
}

impl StubGetProjectDetailUseCase {
    pub fn success(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn error(err: GetProjectDetailError) -> Self {
        Self { result: Err(err) }
    }

    pub fn not_found() -> Self {
        Self::error(GetProjectDetailError::NotFound)
    }
}

#[async_trait]
impl GetProjectDetailUseCase for StubGetProjectDetailUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<Project, GetProjectDetailError> {
        self.result.clone()
    }
}

// ============================================================================
// Achievements
// ============================================================================

#[derive(Clone)]
pub struct StubGetAchievementsUseCase {
    result: Result<Vec<Achievement>, GetAchievementsError>,
}

impl StubGetAchievementsUseCase {
    pub fn success(data: Vec<Achievement>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn error(err: GetAchievementsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetAchievementsUseCase for StubGetAchievementsUseCase {
    async fn execute(&self) -> Result<Vec<Achievement>, GetAchievementsError> {
        self.result.clone()
    }
}

// ============================================================================
// Overview
// ============================================================================

#[derive(Clone)]
pub struct StubGetHomeUseCase {
    result: Result<HomePage, OverviewError>,
}

impl StubGetHomeUseCase {
    pub fn success(page: HomePage) -> Self {
        Self { result: Ok(page) }
    }

    pub fn error(err: OverviewError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetHomeUseCase for StubGetHomeUseCase {
    async fn execute(&self) -> Result<HomePage, OverviewError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetAboutUseCase {
    result: Result<AboutPage, OverviewError>,
}

impl StubGetAboutUseCase {
    pub fn success(page: AboutPage) -> Self {
        Self { result: Ok(page) }
    }

    pub fn error(err: OverviewError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetAboutUseCase for StubGetAboutUseCase {
    async fn execute(&self) -> Result<AboutPage, OverviewError> {
        self.result.clone()
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Echoes the command back as a stored message.
pub struct StubSubmitContactMessageUseCase {
    error: Option<SubmitContactMessageError>,
    calls: AtomicUsize,
    last_subject: Mutex<Option<String>>,
}

impl StubSubmitContactMessageUseCase {
    pub fn success() -> Self {
        Self {
            error: None,
            calls: AtomicUsize::new(0),
            last_subject: Mutex::new(None),
        }
    }

    pub fn error(err: SubmitContactMessageError) -> Self {
        Self {
            error: Some(err),
            ..Self::success()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_subject(&self) -> Option<String> {
        self.last_subject.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<ContactMessage, SubmitContactMessageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let new = command.into_message();
        *self.last_subject.lock().unwrap() = Some(new.subject.clone());

        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        Ok(ContactMessage {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            read: false,
            created_at: Utc::now(),
        })
    }
}

// ============================================================================
// Resume
// ============================================================================

#[derive(Clone)]
pub struct StubGenerateResumeUseCase {
    result: Result<ResumeFile, GenerateResumeError>,
}

impl StubGenerateResumeUseCase {
    pub fn success(file: ResumeFile) -> Self {
        Self { result: Ok(file) }
    }

    pub fn error(err: GenerateResumeError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GenerateResumeUseCase for StubGenerateResumeUseCase {
    async fn execute(&self) -> Result<ResumeFile, GenerateResumeError> {
        self.result.clone()
    }
}

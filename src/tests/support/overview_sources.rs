//! In-memory read ports for the aggregate page and résumé services.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::achievement::application::domain::Achievement;
use crate::modules::achievement::application::ports::outgoing::{
    AchievementQuery, AchievementQueryError,
};
use crate::modules::career::application::domain::{Certification, Education, Experience};
use crate::modules::career::application::ports::outgoing::{CareerQuery, CareerQueryError};
use crate::modules::overview::application::service::OverviewSources;
use crate::modules::profile::application::domain::{
    ContactInfo, Hobby, Profile, ProfileStats, SiteSettings, StatsPatch,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileQuery, ProfileQueryError, ProfileRepository, ProfileRepositoryError,
};
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectSort,
};
use crate::modules::skill::application::domain::Skill;
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

#[derive(Debug, Clone, Default)]
pub struct InMemorySources {
    pub profile: Option<Profile>,
    pub contact_info: Option<ContactInfo>,
    pub site_settings: Option<SiteSettings>,
    pub stats: Option<ProfileStats>,
    pub hobbies: Vec<Hobby>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
}

/// What the services asked the ports for.
#[derive(Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Default)]
struct Recorded {
    project_filter: Option<ProjectListFilter>,
    project_sort: Option<ProjectSort>,
    limits: HashMap<&'static str, Option<u64>>,
}

impl Recorder {
    pub fn last_project_filter(&self) -> Option<ProjectListFilter> {
        self.inner.lock().unwrap().project_filter.clone()
    }

    pub fn last_project_sort(&self) -> Option<ProjectSort> {
        self.inner.lock().unwrap().project_sort
    }

    /// `None` when the port was called without a limit or not at all.
    pub fn limit_for(&self, name: &str) -> Option<u64> {
        self.inner.lock().unwrap().limits.get(name).copied().flatten()
    }

    fn limit(&self, name: &'static str, limit: Option<u64>) {
        self.inner.lock().unwrap().limits.insert(name, limit);
    }

    fn project_call(&self, filter: &ProjectListFilter, sort: ProjectSort) {
        let mut inner = self.inner.lock().unwrap();
        inner.project_filter = Some(filter.clone());
        inner.project_sort = Some(sort);
    }
}

pub struct SourcesBuilder {
    store: InMemorySources,
    project_error: Option<ProjectQueryError>,
    career_error: Option<CareerQueryError>,
}

impl SourcesBuilder {
    pub fn new(store: InMemorySources) -> Self {
        Self {
            store,
            project_error: None,
            career_error: None,
        }
    }

    pub fn failing_projects(mut self, err: ProjectQueryError) -> Self {
        self.project_error = Some(err);
        self
    }

    pub fn failing_career(mut self, err: CareerQueryError) -> Self {
        self.career_error = Some(err);
        self
    }

    pub fn build(self) -> (OverviewSources, Recorder) {
        let recorder = Recorder::default();
        let store = Arc::new(self.store);
        let ports = InMemoryPorts {
            store,
            recorder: recorder.clone(),
            project_error: self.project_error,
            career_error: self.career_error,
        };
        let ports = Arc::new(ports);

        let sources = OverviewSources {
            profile: ports.clone(),
            profile_repository: ports.clone(),
            projects: ports.clone(),
            skills: ports.clone(),
            achievements: ports.clone(),
            career: ports,
        };

        (sources, recorder)
    }
}

fn take<T>(rows: impl Iterator<Item = T>, limit: Option<u64>) -> Vec<T> {
    match limit {
        Some(n) => rows.take(n as usize).collect(),
        None => rows.collect(),
    }
}

struct InMemoryPorts {
    store: Arc<InMemorySources>,
    recorder: Recorder,
    project_error: Option<ProjectQueryError>,
    career_error: Option<CareerQueryError>,
}

impl InMemoryPorts {
    fn career(&self) -> Result<&InMemorySources, CareerQueryError> {
        match &self.career_error {
            Some(err) => Err(err.clone()),
            None => Ok(&self.store),
        }
    }
}

#[async_trait]
impl ProfileQuery for InMemoryPorts {
    async fn get_profile(&self) -> Result<Option<Profile>, ProfileQueryError> {
        Ok(self.store.profile.clone())
    }

    async fn get_contact_info(&self) -> Result<Option<ContactInfo>, ProfileQueryError> {
        Ok(self.store.contact_info.clone())
    }

    async fn get_site_settings(&self) -> Result<Option<SiteSettings>, ProfileQueryError> {
        Ok(self.store.site_settings.clone())
    }

    async fn get_stats(&self) -> Result<Option<ProfileStats>, ProfileQueryError> {
        Ok(self.store.stats.clone())
    }

    async fn list_hobbies(&self, limit: Option<u64>) -> Result<Vec<Hobby>, ProfileQueryError> {
        self.recorder.limit("hobbies", limit);
        Ok(take(self.store.hobbies.iter().cloned(), limit))
    }
}

#[async_trait]
impl ProfileRepository for InMemoryPorts {
    async fn ensure_site_settings(&self) -> Result<SiteSettings, ProfileRepositoryError> {
        Ok(self.store.site_settings.clone().unwrap_or_default())
    }

    async fn apply_stats_patch(
        &self,
        patch: StatsPatch,
    ) -> Result<ProfileStats, ProfileRepositoryError> {
        let mut stats = self.store.stats.clone().unwrap_or_default();
        if let Some(v) = patch.github_followers {
            stats.github_followers = v;
        }
        if let Some(v) = patch.github_stars {
            stats.github_stars = v;
        }
        if let Some(v) = patch.projects_count {
            stats.projects_count = v;
        }
        Ok(stats)
    }
}

#[async_trait]
impl ProjectQuery for InMemoryPorts {
    async fn list(
        &self,
        filter: ProjectListFilter,
        sort: ProjectSort,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        self.recorder.project_call(&filter, sort);
        if let Some(err) = &self.project_error {
            return Err(err.clone());
        }

        let rows = self.store.projects.iter().filter(|p| {
            filter.featured.map_or(true, |f| p.featured == f)
                && filter.project_type.map_or(true, |t| p.project_type == t)
                && filter.difficulty.map_or(true, |d| p.difficulty_level == d)
        });
        Ok(take(rows.cloned(), filter.limit))
    }

    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError> {
        if let Some(err) = &self.project_error {
            return Err(err.clone());
        }
        self.store
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }
}

#[async_trait]
impl SkillQuery for InMemoryPorts {
    async fn list_all(&self) -> Result<Vec<Skill>, SkillQueryError> {
        Ok(self.store.skills.clone())
    }

    async fn list_featured(&self, limit: u64) -> Result<Vec<Skill>, SkillQueryError> {
        self.recorder.limit("skills", Some(limit));
        let rows = self.store.skills.iter().filter(|s| s.featured).cloned();
        Ok(take(rows, Some(limit)))
    }
}

#[async_trait]
impl AchievementQuery for InMemoryPorts {
    async fn list_all(&self) -> Result<Vec<Achievement>, AchievementQueryError> {
        Ok(self.store.achievements.clone())
    }

    async fn list_featured(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<Achievement>, AchievementQueryError> {
        self.recorder.limit("achievements", limit);
        let rows = self.store.achievements.iter().filter(|a| a.featured).cloned();
        Ok(take(rows, limit))
    }
}

#[async_trait]
impl CareerQuery for InMemoryPorts {
    async fn list_education(&self) -> Result<Vec<Education>, CareerQueryError> {
        Ok(self.career()?.education.clone())
    }

    async fn current_education(&self) -> Result<Option<Education>, CareerQueryError> {
        Ok(self.career()?.education.iter().find(|e| e.current).cloned())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, CareerQueryError> {
        Ok(self.career()?.experience.clone())
    }

    async fn list_current_experience(
        &self,
        limit: u64,
    ) -> Result<Vec<Experience>, CareerQueryError> {
        self.recorder.limit("current_experience", Some(limit));
        let rows = self.career()?.experience.iter().filter(|e| e.current).cloned();
        Ok(take(rows, Some(limit)))
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, CareerQueryError> {
        Ok(self.career()?.certifications.clone())
    }

    async fn list_featured_certifications(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<Certification>, CareerQueryError> {
        self.recorder.limit("certifications", limit);
        let rows = self.career()?.certifications.iter().filter(|c| c.featured).cloned();
        Ok(take(rows, limit))
    }
}

pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::modules::achievement::adapter::outgoing::AchievementQueryPostgres;
use crate::modules::achievement::application::achievement_use_cases::AchievementUseCases;
use crate::modules::achievement::application::service::GetAchievementsService;
use crate::modules::career::adapter::outgoing::CareerQueryPostgres;
use crate::modules::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::SubmitContactMessageService;
use crate::modules::email::adapter::outgoing::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::email::application::services::ContactEmailNotifier;
use crate::modules::overview::application::overview_use_cases::OverviewUseCases;
use crate::modules::overview::application::service::{
    GetAboutService, GetHomeService, OverviewSources,
};
use crate::modules::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::{
    GetContactPageService, UpdateProfileStatsService,
};
use crate::modules::project::adapter::outgoing::ProjectQueryPostgres;
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{GetProjectDetailService, GetProjectsService};
use crate::modules::resume::adapter::outgoing::{PrintPdfWriter, ResumeSourceQueries};
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::resume::application::service::GenerateResumeService;
use crate::modules::skill::adapter::outgoing::SkillQueryPostgres;
use crate::modules::skill::application::service::{GetSkillsByCategoryService, GetSkillsService};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::shared::api::{custom_form_config, custom_json_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub struct AppState {
    pub skill: SkillUseCases,
    pub profile: ProfileUseCases,
    pub project: ProjectUseCases,
    pub achievement: AchievementUseCases,
    pub overview: OverviewUseCases,
    pub contact: ContactUseCases,
    pub resume: ResumeUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let db = &config.database;
    let mut opt = ConnectOptions::new(db.url.clone());
    opt.max_connections(db.max_connections)
        .min_connections(db.min_connections)
        .connect_timeout(db.connect_timeout)
        .acquire_timeout(db.connect_timeout)
        .idle_timeout(db.idle_timeout)
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let achievement_query = AchievementQueryPostgres::new(Arc::clone(&db_arc));
    let career_query = CareerQueryPostgres::new(Arc::clone(&db_arc));
    let contact_repo = ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc));

    let smtp_sender = SmtpEmailSender::from_settings(&config.smtp, &config.email_from)
        .context("Failed to configure SMTP transport")?;
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let contact_notifier = ContactEmailNotifier::new(email_sender);

    let sources = OverviewSources {
        profile: Arc::new(profile_query.clone()),
        profile_repository: Arc::new(profile_repo.clone()),
        projects: Arc::new(project_query.clone()),
        skills: Arc::new(skill_query.clone()),
        achievements: Arc::new(achievement_query.clone()),
        career: Arc::new(career_query.clone()),
    };

    let resume_source = ResumeSourceQueries::new(
        Arc::clone(&sources.profile),
        Arc::clone(&sources.skills),
        Arc::clone(&sources.projects),
        Arc::clone(&sources.achievements),
        Arc::clone(&sources.career),
    );

    let state = AppState {
        skill: SkillUseCases {
            get_list: Arc::new(GetSkillsService::new(skill_query.clone())),
            get_grouped: Arc::new(GetSkillsByCategoryService::new(skill_query)),
        },
        profile: ProfileUseCases {
            get_contact_page: Arc::new(GetContactPageService::new(
                profile_query.clone(),
                profile_repo.clone(),
            )),
            update_stats: Arc::new(UpdateProfileStatsService::new(profile_repo)),
        },
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_detail: Arc::new(GetProjectDetailService::new(project_query)),
        },
        achievement: AchievementUseCases {
            get_list: Arc::new(GetAchievementsService::new(achievement_query)),
        },
        overview: OverviewUseCases {
            get_home: Arc::new(GetHomeService::new(sources.clone())),
            get_about: Arc::new(GetAboutService::new(sources)),
        },
        contact: ContactUseCases {
            submit: Arc::new(SubmitContactMessageService::new(
                contact_repo,
                profile_query,
                contact_notifier,
            )),
        },
        resume: ResumeUseCases {
            generate: Arc::new(GenerateResumeService::new(
                resume_source,
                PrintPdfWriter::default(),
                config.resume_date_stamp,
            )),
        },
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_form_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
    // Overview
    cfg.service(crate::modules::overview::adapter::incoming::web::routes::get_home_handler);
    cfg.service(crate::modules::overview::adapter::incoming::web::routes::get_about_handler);
    // Skills
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_skills_by_category_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_skills_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_detail_handler);
    // Achievements
    cfg.service(crate::modules::achievement::adapter::incoming::web::routes::get_achievements_handler);
    // Profile
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_contact_page_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::update_stats_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler);
    // Resume
    cfg.service(crate::modules::resume::adapter::incoming::web::routes::download_resume_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}

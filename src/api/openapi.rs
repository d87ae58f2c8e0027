use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

use crate::modules::achievement::application::domain::{Achievement, AchievementType};
use crate::modules::career::application::domain::{
    Certification, Education, Experience, ExperienceType,
};
use crate::modules::contact::adapter::incoming::web::routes::ContactForm;
use crate::modules::overview::adapter::incoming::web::dto::{AboutResponse, HomeResponse};
use crate::modules::profile::adapter::incoming::web::routes::UpdateStatsRequest;
use crate::modules::profile::application::domain::{
    ContactInfo, Hobby, Profile, ProfileStats, SiteSettings,
};
use crate::modules::profile::application::ports::incoming::use_cases::ContactPage;
use crate::modules::project::application::domain::{DifficultyLevel, Project, ProjectType};
use crate::modules::skill::adapter::incoming::web::dto::{
    SkillGroupResponse, SkillResponse, SkillsByCategoryResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read API, contact form and CV download for a personal portfolio site"
    ),
    paths(
        // Overview
        crate::modules::overview::adapter::incoming::web::routes::get_home_handler,
        crate::modules::overview::adapter::incoming::web::routes::get_about_handler,

        // Skills
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::get_skills_by_category_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_detail_handler,

        // Achievements
        crate::modules::achievement::adapter::incoming::web::routes::get_achievements_handler,

        // Profile
        crate::modules::profile::adapter::incoming::web::routes::get_contact_page_handler,
        crate::modules::profile::adapter::incoming::web::routes::update_stats_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,

        // Resume
        crate::modules::resume::adapter::incoming::web::routes::download_resume_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            HomeResponse,
            AboutResponse,
            SkillResponse,
            SkillGroupResponse,
            SkillsByCategoryResponse,
            Project,
            ProjectType,
            DifficultyLevel,
            Achievement,
            AchievementType,
            Education,
            Experience,
            ExperienceType,
            Certification,
            Profile,
            ContactInfo,
            SiteSettings,
            ProfileStats,
            Hobby,
            ContactPage,
            UpdateStatsRequest,
            ContactForm
        )
    ),
    tags(
        (name = "overview", description = "Aggregated landing and about pages"),
        (name = "skills", description = "Skill listings"),
        (name = "projects", description = "Project listings and details"),
        (name = "achievements", description = "Achievements"),
        (name = "profile", description = "Contact details and profile statistics"),
        (name = "contact", description = "Public contact form"),
        (name = "resume", description = "Generated CV download"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::skill::adapter::incoming::web::dto::SkillsByCategoryResponse,
    modules::skill::application::ports::incoming::use_cases::GetSkillsError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/skills/grouped",
    tag = "skills",
    responses(
        (status = 200, description = "Skills grouped by category", body = SkillsByCategoryResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/skills/grouped")]
pub async fn get_skills_by_category_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_grouped.execute().await {
        Ok(grouped) => ApiResponse::success(SkillsByCategoryResponse::from(&grouped)),
        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to group skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

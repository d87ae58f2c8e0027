use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::skill::adapter::incoming::web::dto::{skill_responses, SkillResponse},
    modules::skill::application::ports::incoming::use_cases::GetSkillsError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "All skills in listing order", body = [SkillResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(skills) => ApiResponse::success(skill_responses(&skills)),
        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

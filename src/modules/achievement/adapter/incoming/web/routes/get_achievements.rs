use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::achievement::application::domain::Achievement,
    modules::achievement::application::ports::incoming::use_cases::GetAchievementsError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/achievements",
    tag = "achievements",
    responses(
        (status = 200, description = "Achievements, most recent first", body = [Achievement]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/achievements")]
pub async fn get_achievements_handler(data: web::Data<AppState>) -> impl Responder {
    match data.achievement.get_list.execute().await {
        Ok(achievements) => ApiResponse::success(achievements),
        Err(GetAchievementsError::QueryFailed(msg)) => {
            error!("Failed to list achievements: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

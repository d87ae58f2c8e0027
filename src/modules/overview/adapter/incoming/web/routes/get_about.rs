use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::overview::adapter::incoming::web::dto::AboutResponse,
    modules::overview::application::ports::incoming::use_cases::OverviewError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/about",
    tag = "overview",
    responses(
        (status = 200, description = "About page aggregate", body = AboutResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.overview.get_about.execute().await {
        Ok(page) => ApiResponse::success(AboutResponse::from(page)),
        Err(OverviewError::QueryFailed(msg)) => {
            error!("Failed to build about page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

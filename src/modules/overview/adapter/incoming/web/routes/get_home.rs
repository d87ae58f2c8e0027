use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::overview::adapter::incoming::web::dto::HomeResponse,
    modules::overview::application::ports::incoming::use_cases::OverviewError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/home",
    tag = "overview",
    responses(
        (status = 200, description = "Landing page aggregate", body = HomeResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/home")]
pub async fn get_home_handler(data: web::Data<AppState>) -> impl Responder {
    match data.overview.get_home.execute().await {
        Ok(page) => ApiResponse::success(HomeResponse::from(page)),
        Err(OverviewError::QueryFailed(msg)) => {
            error!("Failed to build home page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

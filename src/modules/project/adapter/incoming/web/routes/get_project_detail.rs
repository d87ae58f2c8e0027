use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    modules::project::application::domain::Project,
    modules::project::application::ports::incoming::use_cases::GetProjectDetailError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(
        ("id" = Uuid, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project detail", body = Project),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_detail_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_detail.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectDetailError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectDetailError::QueryFailed(msg)) => {
            error!("Failed to fetch project {}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}

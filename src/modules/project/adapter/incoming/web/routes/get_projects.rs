use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::IntoParams;

use crate::{
    api::schemas::ErrorResponse,
    modules::project::application::domain::{
        DifficultyLevel, Project, ProjectDomainError, ProjectType,
    },
    modules::project::application::ports::incoming::use_cases::GetProjectsError,
    modules::project::application::ports::outgoing::ProjectListFilter,
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// android | web | desktop | api | ai | other
    pub project_type: Option<String>,
    /// beginner | intermediate | advanced | expert
    pub difficulty: Option<String>,
    pub featured: Option<bool>,
}

impl TryFrom<GetProjectsQuery> for ProjectListFilter {
    type Error = ProjectDomainError;

    fn try_from(q: GetProjectsQuery) -> Result<Self, Self::Error> {
        let project_type = non_blank(q.project_type)
            .map(|s| s.parse::<ProjectType>())
            .transpose()?;

        let difficulty = non_blank(q.difficulty)
            .map(|s| s.parse::<DifficultyLevel>())
            .transpose()?;

        Ok(ProjectListFilter {
            project_type,
            difficulty,
            featured: q.featured,
            limit: None,
        })
    }
}

// `?project_type=` means "no filter"
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Projects in showcase order", body = [Project]),
        (status = 400, description = "Unknown project type or difficulty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match ProjectListFilter::try_from(query.into_inner()) {
        Ok(filter) => filter,
        Err(err) => {
            warn!("Rejected project filter: {}", err);
            return ApiResponse::bad_request("INVALID_FILTER", &err.to_string());
        }
    };

    match data.project.get_list.execute(filter).await {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

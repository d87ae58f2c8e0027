use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    modules::profile::application::domain::ProfileStats,
    modules::profile::application::ports::incoming::use_cases::{
        UpdateProfileStatsCommand, UpdateProfileStatsCommandError, UpdateProfileStatsError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Counters to overwrite; omitted fields are left unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatsRequest {
    #[schema(example = 120)]
    pub github_followers: Option<i64>,
    #[schema(example = 340)]
    pub github_stars: Option<i64>,
    #[schema(example = 18)]
    pub projects_count: Option<i64>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/update-stats",
    tag = "profile",
    request_body = UpdateStatsRequest,
    responses(
        (status = 200, description = "Stats updated", body = ProfileStats),
        (status = 400, description = "Malformed body or negative counter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/update-stats")]
pub async fn update_stats_handler(
    data: web::Data<AppState>,
    payload: web::Json<UpdateStatsRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match UpdateProfileStatsCommand::new(
        payload.github_followers,
        payload.github_stars,
        payload.projects_count,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.profile.update_stats.execute(command).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(UpdateProfileStatsError::RepositoryError(msg)) => {
            error!("Failed to update profile stats: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: UpdateProfileStatsCommandError) -> HttpResponse {
    warn!("Rejected stats update: {}", err);
    ApiResponse::bad_request("INVALID_STATS", &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubUpdateProfileStatsUseCase;

    #[actix_web::test]
    async fn valid_patch_returns_updated_stats() {
        let stub = Arc::new(StubUpdateProfileStatsUseCase::success(ProfileStats {
            profile_views: 1,
            github_followers: 50,
            github_stars: 0,
            projects_count: 0,
        }));

        let app_state = TestAppStateBuilder::default()
            .with_update_profile_stats_arc(stub.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(update_stats_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/update-stats")
            .set_json(json!({ "github_followers": 50 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["github_followers"], 50);
        assert_eq!(stub.calls(), 1);
    }

    #[actix_web::test]
    async fn negative_value_is_rejected_without_calling_use_case() {
        let stub = Arc::new(StubUpdateProfileStatsUseCase::success(ProfileStats::default()));

        let app_state = TestAppStateBuilder::default()
            .with_update_profile_stats_arc(stub.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(update_stats_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/update-stats")
            .set_json(json!({ "github_stars": -3 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_STATS");
        assert_eq!(stub.calls(), 0);
    }

    #[actix_web::test]
    async fn malformed_json_is_a_validation_error() {
        let stub = Arc::new(StubUpdateProfileStatsUseCase::success(ProfileStats::default()));

        let app_state = TestAppStateBuilder::default()
            .with_update_profile_stats_arc(stub.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(update_stats_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/update-stats")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(stub.calls(), 0);
    }

    #[actix_web::test]
    async fn repository_failure_returns_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_update_profile_stats_arc(Arc::new(StubUpdateProfileStatsUseCase::error(
                UpdateProfileStatsError::RepositoryError("deadlock".to_string()),
            )))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .service(update_stats_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/update-stats")
            .set_json(json!({ "projects_count": 4 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

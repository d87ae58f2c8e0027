use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::profile::application::ports::incoming::use_cases::{
        ContactPage, GetContactPageError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "profile",
    responses(
        (status = 200, description = "Contact info, stats and site settings", body = ContactPage),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/contact")]
pub async fn get_contact_page_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get_contact_page.execute().await {
        Ok(page) => ApiResponse::success(page),
        Err(GetContactPageError::QueryFailed(msg)) => {
            error!("Failed to load contact page: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::modules::profile::application::domain::SiteSettings;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_contact_info;
    use crate::tests::support::stubs::StubGetContactPageUseCase;

    #[actix_web::test]
    async fn returns_contact_page() {
        let app_state = TestAppStateBuilder::default()
            .with_get_contact_page(StubGetContactPageUseCase::success(ContactPage {
                contact_info: Some(sample_contact_info()),
                stats: None,
                site_settings: SiteSettings::default(),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_contact_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["contact_info"]["github_url"], "https://github.com/ada");
        assert!(body["data"]["stats"].is_null());
        assert_eq!(body["data"]["site_settings"]["site_name"], "Portfolio");
    }

    #[actix_web::test]
    async fn failure_returns_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_get_contact_page(StubGetContactPageUseCase::error(
                GetContactPageError::QueryFailed("db down".to_string()),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_contact_page_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    modules::contact::application::ports::incoming::use_cases::{
        SubmitContactMessageCommand, SubmitContactMessageCommandError, SubmitContactMessageError,
    },
    shared::api::ApiResponse,
    AppState,
};

pub const CONTACT_SENT_LOCATION: &str = "/contact?sent=true";

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Contact form fields. Missing fields are treated as empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactForm {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Project inquiry")]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Stored; redirects to /contact?sent=true"),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/contact")]
pub async fn submit_contact_message_handler(
    data: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let form = form.into_inner();

    // 1️⃣ Validate
    let command = match SubmitContactMessageCommand::new(
        &form.name,
        &form.email,
        &form.subject,
        &form.message,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Persist (+ notify)
    match data.contact.submit.execute(command).await {
        Ok(_) => ApiResponse::see_other(CONTACT_SENT_LOCATION),
        Err(SubmitContactMessageError::RepositoryError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: SubmitContactMessageCommandError) -> HttpResponse {
    warn!("Rejected contact form: {}", err);
    ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
}

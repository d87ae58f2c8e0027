use actix_web::{
    get,
    http::header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue},
    web, HttpResponse, Responder,
};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::resume::application::ports::incoming::use_cases::{GenerateResumeError, ResumeFile},
    shared::api::ApiResponse,
    AppState,
};

/// Plain `filename` for every client, plus RFC 5987 `filename*` when the
/// name is not ASCII.
fn disposition_params(filename: String) -> Vec<DispositionParam> {
    if filename.is_ascii() {
        return vec![DispositionParam::Filename(filename)];
    }

    let fallback: String = filename.chars().filter(char::is_ascii).collect();
    let fallback = fallback.trim_start_matches('_').to_string();

    vec![
        DispositionParam::Filename(fallback),
        DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_string()),
            language_tag: None,
            value: filename.into_bytes(),
        }),
    ]
}

fn attachment(file: ResumeFile) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: disposition_params(file.filename),
        })
        .body(file.bytes)
}

#[utoipa::path(
    get,
    path = "/download-cv",
    tag = "resume",
    responses(
        (status = 200, description = "Generated CV as a PDF attachment", content_type = "application/pdf", body = Vec<u8>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/download-cv")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.generate.execute().await {
        Ok(file) => attachment(file),
        Err(GenerateResumeError::SourceFailed(msg)) => {
            error!("Failed to load resume content: {}", msg);
            ApiResponse::internal_error()
        }
        Err(GenerateResumeError::RenderFailed(msg)) => {
            error!("Failed to render resume: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{FormConfig, JsonConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Same envelope for urlencoded bodies (the public contact form).
pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned for every failed request
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "INVALID_FILTER")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Unknown project type: mobile")]
    pub message: String,
}

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    /// A 400 body for input rejected before reaching a use case.
    pub fn validation(message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            name: "ValidationError".to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Builds the `(status, body)` pair; `message` is the error's i18n code.
pub fn error_response(
    status: StatusCode,
    name: &str,
    message: String,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            name: name.to_string(),
            message,
        }),
    )
}

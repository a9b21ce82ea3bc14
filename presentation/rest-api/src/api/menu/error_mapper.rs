use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CatalogError::BusinessNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CatalogError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };
        error_response(status, name, self.to_string())
    }
}

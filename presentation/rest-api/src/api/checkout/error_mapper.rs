use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CheckoutError::MissingCustomerField { .. }
            | CheckoutError::EmptyCart
            | CheckoutError::BusinessNotSelected
            | CheckoutError::InsufficientChange
            | CheckoutError::Cart(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            CheckoutError::SessionNotFound | CheckoutError::BusinessNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            CheckoutError::CartChanged => (StatusCode::CONFLICT, "Conflict"),
            CheckoutError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        let message = match &self {
            CheckoutError::MissingCustomerField { field } => {
                format!("{}.{}", self, field)
            }
            _ => self.to_string(),
        };
        error_response(status, name, message)
    }
}

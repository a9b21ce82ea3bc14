use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::IndexOutOfRange { .. }
            | CartError::InvalidQuantity
            | CartError::EmptySelection
            | CartError::FlavorsRequireSize
            | CartError::TooManyFlavors { .. }
            | CartError::MultipleFlavorsNotAllowed
            | CartError::DuplicateFlavor
            | CartError::CannotRemoveBaseFlavor
            | CartError::UnknownIngredient
            | CartError::BusinessNotSelected
            | CartError::ProductUnavailable => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::SessionNotFound
            | CartError::BusinessNotFound
            | CartError::ProductNotFound
            | CartError::SizeNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::ConcurrentChange => (StatusCode::CONFLICT, "Conflict"),
            CartError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };
        error_response(status, name, self.to_string())
    }
}

use std::sync::Arc;

use chrono::Local;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::cart::routes::parse_session_id;
use crate::api::checkout::dto::{CheckoutRequest, OrderSummaryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(place_order_use_case: Arc<dyn PlaceOrderUseCase>) -> Self {
        Self {
            place_order_use_case,
        }
    }
}

#[OpenApi]
impl CheckoutApi {
    /// Check out a cart
    ///
    /// Returns the order summary with the business's delivery fee added,
    /// then empties the cart.
    #[oai(path = "/carts/:id/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn checkout(&self, id: Path<String>, body: Json<CheckoutRequest>) -> CheckoutResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CheckoutResponse::BadRequest(json),
        };
        let customer = match body.0.into_customer() {
            Ok(customer) => customer,
            Err(message) => return CheckoutResponse::BadRequest(ErrorResponse::validation(message)),
        };

        let params = PlaceOrderParams {
            session_id,
            customer,
            at: Local::now().naive_local(),
        };

        match self.place_order_use_case.execute(params).await {
            Ok(summary) => CheckoutResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    404 => CheckoutResponse::NotFound(json),
                    409 => CheckoutResponse::Conflict(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<OrderSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

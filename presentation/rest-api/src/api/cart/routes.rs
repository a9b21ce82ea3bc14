use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartSession;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::set_business::{
    SetCartBusinessParams, SetCartBusinessUseCase,
};
use business::domain::cart::use_cases::start::StartCartUseCase;
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use business::domain::shared::value_objects::{BusinessId, ProductId, SizeId};

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, SetCartBusinessRequest, UpdateCartItemQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    start_use_case: Arc<dyn StartCartUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    set_business_use_case: Arc<dyn SetCartBusinessUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        start_use_case: Arc<dyn StartCartUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        set_business_use_case: Arc<dyn SetCartBusinessUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            start_use_case,
            get_use_case,
            set_business_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

pub(crate) fn parse_session_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("cart.invalid_id"))
}

impl From<Result<CartSession, CartError>> for CartCommandResponse {
    fn from(result: Result<CartSession, CartError>) -> Self {
        match result {
            Ok(session) => CartCommandResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CartCommandResponse::BadRequest(json),
                    404 => CartCommandResponse::NotFound(json),
                    409 => CartCommandResponse::Conflict(json),
                    _ => CartCommandResponse::InternalError(json),
                }
            }
        }
    }
}

/// Cart session API
///
/// A cart is bound to one business; items are addressed by their position.
#[OpenApi]
impl CartApi {
    /// Start a cart
    ///
    /// Creates an empty cart session and returns its id.
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn start_cart(&self) -> StartCartResponse {
        match self.start_use_case.execute().await {
            Ok(session) => StartCartResponse::Created(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                StartCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(&self, id: Path<String>) -> CartCommandResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartCommandResponse::BadRequest(json),
        };

        self.get_use_case
            .execute(GetCartParams { session_id })
            .await
            .into()
    }

    /// Bind the cart to a business
    ///
    /// Switching to a different business empties the cart.
    #[oai(path = "/carts/:id/business", method = "put", tag = "ApiTags::Carts")]
    async fn set_business(
        &self,
        id: Path<String>,
        body: Json<SetCartBusinessRequest>,
    ) -> CartCommandResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartCommandResponse::BadRequest(json),
        };

        self.set_business_use_case
            .execute(SetCartBusinessParams {
                session_id,
                business_id: BusinessId::new(body.0.business_id),
            })
            .await
            .into()
    }

    /// Add an item
    ///
    /// Appends a new line; identical lines are never merged.
    #[oai(path = "/carts/:id/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(&self, id: Path<String>, body: Json<AddCartItemRequest>) -> CartCommandResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartCommandResponse::BadRequest(json),
        };
        let request = body.0;

        let params = AddCartItemParams {
            session_id,
            product_id: ProductId::new(request.product_id),
            size_id: request.size_id.map(SizeId::new),
            extra_flavor_ids: request
                .extra_flavor_ids
                .into_iter()
                .map(ProductId::new)
                .collect(),
            ingredient_toggles: request
                .ingredient_toggles
                .into_iter()
                .map(Into::into)
                .collect(),
            quantity: request.quantity.unwrap_or(1),
            notes: request.notes,
        };

        self.add_item_use_case.execute(params).await.into()
    }

    /// Change an item's quantity
    #[oai(path = "/carts/:id/items/:index", method = "put", tag = "ApiTags::Carts")]
    async fn update_item_quantity(
        &self,
        id: Path<String>,
        index: Path<u32>,
        body: Json<UpdateCartItemQuantityRequest>,
    ) -> CartCommandResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartCommandResponse::BadRequest(json),
        };

        self.update_quantity_use_case
            .execute(UpdateCartItemQuantityParams {
                session_id,
                index: index.0 as usize,
                quantity: body.0.quantity,
            })
            .await
            .into()
    }

    /// Remove an item
    ///
    /// Later items shift down by one position.
    #[oai(path = "/carts/:id/items/:index", method = "delete", tag = "ApiTags::Carts")]
    async fn remove_item(&self, id: Path<String>, index: Path<u32>) -> CartCommandResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartCommandResponse::BadRequest(json),
        };

        self.remove_item_use_case
            .execute(RemoveCartItemParams {
                session_id,
                index: index.0 as usize,
            })
            .await
            .into()
    }

    /// Clear the cart
    ///
    /// Removes every item but keeps the business.
    #[oai(path = "/carts/:id/items", method = "delete", tag = "ApiTags::Carts")]
    async fn clear_cart(&self, id: Path<String>) -> CartCommandResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartCommandResponse::BadRequest(json),
        };

        self.clear_use_case
            .execute(ClearCartParams { session_id })
            .await
            .into()
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartCommandResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

use std::sync::Arc;

use chrono::Local;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::use_cases::get_menu::{GetMenuParams, GetMenuUseCase};
use business::domain::shared::value_objects::BusinessId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::menu::dto::MenuResponse;
use crate::api::tags::ApiTags;

pub struct MenuApi {
    get_menu_use_case: Arc<dyn GetMenuUseCase>,
}

impl MenuApi {
    pub fn new(get_menu_use_case: Arc<dyn GetMenuUseCase>) -> Self {
        Self { get_menu_use_case }
    }
}

#[OpenApi]
impl MenuApi {
    /// Get a business menu
    ///
    /// Returns the business, whether it is open now, its in-stock products
    /// and its sizes.
    #[oai(path = "/businesses/:id/menu", method = "get", tag = "ApiTags::Menu")]
    async fn get_menu(&self, id: Path<String>) -> GetMenuResponse {
        let params = GetMenuParams {
            business_id: BusinessId::new(id.0),
            at: Local::now().naive_local(),
        };

        match self.get_menu_use_case.execute(params).await {
            Ok(menu) => GetMenuResponse::Ok(Json(menu.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetMenuResponse::NotFound(json),
                    _ => GetMenuResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMenuResponse {
    #[oai(status = 200)]
    Ok(Json<MenuResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

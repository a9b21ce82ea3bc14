use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Menu;
use crate::domain::shared::value_objects::BusinessId;

pub struct GetMenuParams {
    pub business_id: BusinessId,
    /// Local wall-clock time the opening hours are checked against.
    pub at: NaiveDateTime,
}

#[async_trait]
pub trait GetMenuUseCase: Send + Sync {
    async fn execute(&self, params: GetMenuParams) -> Result<Menu, CatalogError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::shared::value_objects::BusinessId;

pub struct SetCartBusinessParams {
    pub session_id: Uuid,
    pub business_id: BusinessId,
}

#[async_trait]
pub trait SetCartBusinessUseCase: Send + Sync {
    async fn execute(&self, params: SetCartBusinessParams) -> Result<CartSession, CartError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;

pub struct UpdateCartItemQuantityParams {
    pub session_id: Uuid,
    pub index: usize,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<CartSession, CartError>;
}

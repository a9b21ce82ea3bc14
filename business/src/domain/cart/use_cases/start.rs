use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;

#[async_trait]
pub trait StartCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<CartSession, CartError>;
}

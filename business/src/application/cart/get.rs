use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

use super::session;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartSession, CartError> {
        self.logger
            .debug(&format!("Getting cart: {}", params.session_id));

        let store = session::load(self.repository.as_ref(), params.session_id).await?;

        Ok(CartSession {
            id: params.session_id,
            state: store.into_state(),
        })
    }
}

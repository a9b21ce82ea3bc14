use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::engine::CartAction;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

use super::session;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<CartSession, CartError> {
        self.logger
            .info(&format!("Clearing cart {}", params.session_id));

        let session = session::dispatch_all(
            self.repository.as_ref(),
            params.session_id,
            vec![CartAction::ClearCart],
        )
        .await?;

        self.logger.info(&format!("Cart {} cleared", session.id));
        Ok(session)
    }
}

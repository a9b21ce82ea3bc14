use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::engine::CartAction;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

use super::session;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<CartSession, CartError> {
        self.logger.info(&format!(
            "Removing item {} from cart {}",
            params.index, params.session_id
        ));

        let session = session::dispatch_all(
            self.repository.as_ref(),
            params.session_id,
            vec![CartAction::RemoveFromCart {
                index: params.index,
            }],
        )
        .await?;

        self.logger.info(&format!(
            "Item removed from cart {}, {} left",
            session.id,
            session.state.items().len()
        ));
        Ok(session)
    }
}

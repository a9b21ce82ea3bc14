use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::engine::CartAction;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

use super::session;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<CartSession, CartError> {
        self.logger.info(&format!(
            "Setting quantity of item {} in cart {} to {}",
            params.index, params.session_id, params.quantity
        ));

        let session = session::dispatch_all(
            self.repository.as_ref(),
            params.session_id,
            vec![CartAction::UpdateQuantity {
                index: params.index,
                quantity: params.quantity,
            }],
        )
        .await?;

        self.logger.info(&format!(
            "Cart {} total is now {}",
            session.id,
            session.state.total()
        ));
        Ok(session)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartSession, CartState};
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::start::StartCartUseCase;
use crate::domain::logger::Logger;

pub struct StartCartUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StartCartUseCase for StartCartUseCaseImpl {
    async fn execute(&self) -> Result<CartSession, CartError> {
        let session = CartSession {
            id: Uuid::new_v4(),
            state: CartState::default(),
        };
        self.repository.save(session.id, &session.state).await?;

        self.logger
            .info(&format!("Cart session started: {}", session.id));
        Ok(session)
    }
}

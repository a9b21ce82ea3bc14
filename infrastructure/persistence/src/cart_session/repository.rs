use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartState;
use business::domain::cart::repository::{CartSessionRepository, CartTransition};
use business::domain::errors::RepositoryError;

/// Keeps cart sessions in process memory. Sessions are lost on restart.
#[derive(Default)]
pub struct CartSessionRepositoryMemory {
    sessions: RwLock<HashMap<Uuid, CartState>>,
}

impl CartSessionRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartSessionRepository for CartSessionRepositoryMemory {
    async fn get(&self, id: Uuid) -> Result<CartState, RepositoryError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, id: Uuid, state: &CartState) -> Result<(), RepositoryError> {
        self.sessions.write().await.insert(id, state.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, transition: CartTransition) -> Result<CartState, CartError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&id).ok_or(CartError::SessionNotFound)?;
        let next = transition(&*stored)?;
        *stored = next.clone();
        Ok(next)
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::errors::CartError;
use super::model::CartState;

/// A change applied to the latest stored cart. Returning an error leaves the
/// stored cart untouched.
pub type CartTransition = Box<dyn FnOnce(&CartState) -> Result<CartState, CartError> + Send>;

/// Storage of live cart sessions.
///
/// Carts are session-scoped; adapters are not expected to survive restarts.
#[async_trait]
pub trait CartSessionRepository: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<CartState, RepositoryError>;
    async fn save(&self, id: Uuid, state: &CartState) -> Result<(), RepositoryError>;
    /// Runs `transition` against the stored cart and stores its result, with
    /// no other write to the same session in between.
    ///
    /// Fails with `CartError::SessionNotFound` for an unknown session.
    async fn update(&self, id: Uuid, transition: CartTransition) -> Result<CartState, CartError>;
}

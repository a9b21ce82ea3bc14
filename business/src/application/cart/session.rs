use uuid::Uuid;

use crate::domain::cart::engine::{CartAction, CartStore};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::errors::RepositoryError;

/// Loads the session's cart into a store.
pub(crate) async fn load(
    repository: &dyn CartSessionRepository,
    session_id: Uuid,
) -> Result<CartStore, CartError> {
    let state = repository
        .get(session_id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => CartError::SessionNotFound,
            other => CartError::Repository(other),
        })?;
    Ok(CartStore::from_state(state))
}

/// Runs `change` on a store holding the latest stored cart and persists the
/// result in one repository update. Nothing is saved if `change` fails.
pub(crate) async fn transact<F>(
    repository: &dyn CartSessionRepository,
    session_id: Uuid,
    change: F,
) -> Result<CartSession, CartError>
where
    F: FnOnce(&mut CartStore) -> Result<(), CartError> + Send + 'static,
{
    let state = repository
        .update(
            session_id,
            Box::new(move |current| {
                let mut store = CartStore::from_state(current.clone());
                change(&mut store)?;
                Ok(store.into_state())
            }),
        )
        .await?;
    Ok(CartSession {
        id: session_id,
        state,
    })
}

/// Applies `actions` in order to the latest stored cart.
pub(crate) async fn dispatch_all(
    repository: &dyn CartSessionRepository,
    session_id: Uuid,
    actions: Vec<CartAction>,
) -> Result<CartSession, CartError> {
    transact(repository, session_id, move |store| {
        for action in actions {
            store.dispatch(action)?;
        }
        Ok(())
    })
    .await
}

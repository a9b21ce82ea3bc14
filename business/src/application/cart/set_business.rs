use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::engine::CartAction;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::set_business::{
    SetCartBusinessParams, SetCartBusinessUseCase,
};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

use super::session;

pub struct SetCartBusinessUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetCartBusinessUseCase for SetCartBusinessUseCaseImpl {
    async fn execute(&self, params: SetCartBusinessParams) -> Result<CartSession, CartError> {
        self.logger.info(&format!(
            "Binding cart {} to business {}",
            params.session_id, params.business_id
        ));

        // Verify the business exists
        self.catalog
            .get_business(&params.business_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::BusinessNotFound,
                other => CartError::Repository(other),
            })?;

        let session = session::dispatch_all(
            self.repository.as_ref(),
            params.session_id,
            vec![CartAction::SetBusiness(params.business_id)],
        )
        .await?;

        self.logger.info(&format!(
            "Cart {} bound, {} items kept",
            session.id,
            session.state.items().len()
        ));
        Ok(session)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::builder::ItemBuilder;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::model::{Product, Size};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{BusinessId, ProductId, SizeId};

use super::session;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddCartItemUseCaseImpl {
    async fn find_product(
        &self,
        id: &ProductId,
        business_id: &BusinessId,
    ) -> Result<Product, CartError> {
        let product = self.catalog.get_product(id).await.map_err(|e| match e {
            RepositoryError::NotFound => CartError::ProductNotFound,
            other => CartError::Repository(other),
        })?;

        if &product.business_id != business_id {
            return Err(CartError::ProductNotFound);
        }
        if !product.in_stock {
            return Err(CartError::ProductUnavailable);
        }
        Ok(product)
    }

    async fn find_size(&self, id: &SizeId, business_id: &BusinessId) -> Result<Size, CartError> {
        let size = self.catalog.get_size(id).await.map_err(|e| match e {
            RepositoryError::NotFound => CartError::SizeNotFound,
            other => CartError::Repository(other),
        })?;

        if &size.business_id != business_id {
            return Err(CartError::SizeNotFound);
        }
        Ok(size)
    }
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartSession, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart {}",
            params.product_id, params.session_id
        ));

        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let store = session::load(self.repository.as_ref(), params.session_id).await?;
        let business_id = store
            .state()
            .business_id()
            .cloned()
            .ok_or(CartError::BusinessNotSelected)?;

        let product = self.find_product(&params.product_id, &business_id).await?;
        let size = match &params.size_id {
            Some(size_id) => Some(self.find_size(size_id, &business_id).await?),
            None => None,
        };

        let mut builder = ItemBuilder::new(product, &[]);
        if let Some(size) = size {
            builder.select_size(size);
        }
        for flavor_id in &params.extra_flavor_ids {
            let flavor = self.find_product(flavor_id, &business_id).await?;
            builder.add_flavor(&flavor)?;
        }
        for toggle in &params.ingredient_toggles {
            builder.toggle_ingredient(toggle.flavor_index, &toggle.ingredient_id)?;
        }
        builder.set_quantity(params.quantity);
        if let Some(notes) = params.notes {
            builder.set_notes(notes);
        }

        // The cart may have changed during the catalog lookups.
        let session = session::transact(self.repository.as_ref(), params.session_id, move |store| {
            if store.state().business_id() != Some(&business_id) {
                return Err(CartError::ConcurrentChange);
            }
            for action in builder.into_actions(store.state().items().len())? {
                store.dispatch(action)?;
            }
            Ok(())
        })
        .await?;

        self.logger.info(&format!(
            "Cart {} now has {} items, total {}",
            session.id,
            session.state.items().len(),
            session.state.total()
        ));
        Ok(session)
    }
}

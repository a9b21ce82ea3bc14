use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{BusinessId, ProductId, SizeId};
use crate::domain::storefront::model::Business;

use super::model::{Product, Size};

/// Read-only access to the hosted catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_business(&self, id: &BusinessId) -> Result<Business, RepositoryError>;
    async fn get_products(&self, business_id: &BusinessId) -> Result<Vec<Product>, RepositoryError>;
    async fn get_product(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    async fn get_sizes(&self, business_id: &BusinessId) -> Result<Vec<Size>, RepositoryError>;
    async fn get_size(&self, id: &SizeId) -> Result<Size, RepositoryError>;
}

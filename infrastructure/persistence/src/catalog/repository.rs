use std::collections::HashMap;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;

use business::domain::catalog::model::{Ingredient, Product, Size};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{BusinessId, ProductId, SizeId};
use business::domain::storefront::model::Business;

use super::entity::{BusinessEntity, IngredientEntity, ProductEntity, SizeEntity};

const PRODUCT_COLUMNS: &str = "id, business_id, name, description, price, price_unit, image_url, in_stock, category, allows_multiple_flavors";
const SIZE_COLUMNS: &str = "id, business_id, name, price, max_flavors, description";
const INGREDIENT_COLUMNS: &str = "id, product_id, name, price, default_included";

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
    default_delivery_fee: BigDecimal,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool, default_delivery_fee: BigDecimal) -> Self {
        Self {
            pool,
            default_delivery_fee,
        }
    }

    async fn ingredients_of(
        &self,
        product_ids: &[String],
    ) -> Result<HashMap<String, Vec<Ingredient>>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = sqlx::query_as::<_, IngredientEntity>(&format!(
            "SELECT {} FROM product_ingredients WHERE product_id = ANY($1) ORDER BY name",
            INGREDIENT_COLUMNS
        ))
        .bind(product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut grouped: HashMap<String, Vec<Ingredient>> = HashMap::new();
        for entity in entities {
            grouped
                .entry(entity.product_id.clone())
                .or_default()
                .push(entity.into_domain());
        }
        Ok(grouped)
    }

    async fn with_ingredients(
        &self,
        entities: Vec<ProductEntity>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let ids: Vec<String> = entities.iter().map(|e| e.id.clone()).collect();
        let mut ingredients = self.ingredients_of(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let own = ingredients.remove(&e.id).unwrap_or_default();
                e.into_domain(own)
            })
            .collect())
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn get_business(&self, id: &BusinessId) -> Result<Business, RepositoryError> {
        let entity = sqlx::query_as::<_, BusinessEntity>(
            "SELECT id, name, whatsapp, delivery_fee, business_hours FROM businesses WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain(&self.default_delivery_fee)
    }

    async fn get_products(&self, business_id: &BusinessId) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE business_id = $1 ORDER BY category NULLS LAST, name",
            PRODUCT_COLUMNS
        ))
        .bind(business_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.with_ingredients(entities).await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        self.with_ingredients(vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_sizes(&self, business_id: &BusinessId) -> Result<Vec<Size>, RepositoryError> {
        let entities = sqlx::query_as::<_, SizeEntity>(&format!(
            "SELECT {} FROM sizes WHERE business_id = $1 ORDER BY price",
            SIZE_COLUMNS
        ))
        .bind(business_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_size(&self, id: &SizeId) -> Result<Size, RepositoryError> {
        let entity = sqlx::query_as::<_, SizeEntity>(&format!(
            "SELECT {} FROM sizes WHERE id = $1",
            SIZE_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

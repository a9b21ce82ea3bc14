//! Mocks and fixtures shared by the use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::cart::repository::{CartSessionRepository, CartTransition};
use crate::domain::catalog::model::{Ingredient, Product, Size};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::value_objects::PriceUnit;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{BusinessId, IngredientId, ProductId, SizeId};
use crate::domain::storefront::hours::BusinessHours;
use crate::domain::storefront::model::Business;

mock! {
    pub CartSessionRepo {}

    #[async_trait]
    impl CartSessionRepository for CartSessionRepo {
        async fn get(&self, id: Uuid) -> Result<CartState, RepositoryError>;
        async fn save(&self, id: Uuid, state: &CartState) -> Result<(), RepositoryError>;
        async fn update(&self, id: Uuid, transition: CartTransition) -> Result<CartState, CartError>;
    }
}

mock! {
    pub CatalogRepo {}

    #[async_trait]
    impl CatalogRepository for CatalogRepo {
        async fn get_business(&self, id: &BusinessId) -> Result<Business, RepositoryError>;
        async fn get_products(&self, business_id: &BusinessId) -> Result<Vec<Product>, RepositoryError>;
        async fn get_product(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn get_sizes(&self, business_id: &BusinessId) -> Result<Vec<Size>, RepositoryError>;
        async fn get_size(&self, id: &SizeId) -> Result<Size, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

/// A session repository whose stored cart is `state` for every read and update.
pub fn sessions_holding(state: CartState) -> MockCartSessionRepo {
    let mut mock_repo = MockCartSessionRepo::new();
    let read = state.clone();
    mock_repo.expect_get().returning(move |_| Ok(read.clone()));
    mock_repo
        .expect_update()
        .returning(move |_, transition| transition(&state));
    mock_repo
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn money(value: &str) -> BigDecimal {
    value.parse().unwrap()
}

pub fn business(id: &str) -> Business {
    Business {
        id: BusinessId::new(id),
        name: "Pizzaria Napoli".to_string(),
        whatsapp: Some("5511999999999".to_string()),
        delivery_fee: money("5.00"),
        hours: BusinessHours::default(),
    }
}

pub fn product(id: &str, business_id: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        business_id: BusinessId::new(business_id),
        name: format!("Pizza {}", id),
        description: None,
        price: money(price),
        price_unit: PriceUnit::Unit,
        image_url: None,
        in_stock: true,
        category: Some("pizzas".to_string()),
        allows_multiple_flavors: true,
        ingredients: vec![Ingredient {
            id: IngredientId::new("bacon"),
            name: "Bacon".to_string(),
            price: money("5.00"),
            default_included: false,
        }],
    }
}

pub fn size(id: &str, business_id: &str, price: &str, max_flavors: u32) -> Size {
    Size {
        id: SizeId::new(id),
        business_id: BusinessId::new(business_id),
        name: id.to_uppercase(),
        price: money(price),
        max_flavors,
        description: None,
    }
}

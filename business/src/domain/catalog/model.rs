use bigdecimal::BigDecimal;

use super::value_objects::PriceUnit;
use crate::domain::shared::value_objects::{BusinessId, IngredientId, ProductId, SizeId};
use crate::domain::storefront::model::Business;

/// An ingredient a customer may toggle on a product; `price` is the extra charge.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub price: BigDecimal,
    pub default_included: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub business_id: BusinessId,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub price_unit: PriceUnit,
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub category: Option<String>,
    pub allows_multiple_flavors: bool,
    pub ingredients: Vec<Ingredient>,
}

/// An order-size tier. Sets a flat price and how many flavors one item may combine.
#[derive(Debug, Clone, PartialEq)]
pub struct Size {
    pub id: SizeId,
    pub business_id: BusinessId,
    pub name: String,
    pub price: BigDecimal,
    pub max_flavors: u32,
    pub description: Option<String>,
}

/// What a customer browses before building a cart.
#[derive(Debug, Clone)]
pub struct Menu {
    pub business: Business,
    pub is_open: bool,
    pub products: Vec<Product>,
    pub sizes: Vec<Size>,
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::shared::value_objects::{IngredientId, ProductId, SizeId};

/// Flips one ingredient of one flavor away from its default.
pub struct IngredientToggle {
    pub flavor_index: usize,
    pub ingredient_id: IngredientId,
}

pub struct AddCartItemParams {
    pub session_id: Uuid,
    pub product_id: ProductId,
    pub size_id: Option<SizeId>,
    pub extra_flavor_ids: Vec<ProductId>,
    pub ingredient_toggles: Vec<IngredientToggle>,
    pub quantity: u32,
    pub notes: Option<String>,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartSession, CartError>;
}

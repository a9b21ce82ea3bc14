use poem_openapi::{Enum, Object};

use business::domain::cart::model::{
    CartItem, CartProduct, CartSession, IngredientChoice, ItemSelection,
};
use business::domain::cart::use_cases::add_item::IngredientToggle;
use business::domain::shared::value_objects::IngredientId;

use crate::api::money::format_money;

#[derive(Debug, Clone, PartialEq, Eq, Enum)]
pub enum ItemKindDto {
    #[oai(rename = "simple")]
    Simple,
    #[oai(rename = "sized_combo")]
    SizedCombo,
}

#[derive(Debug, Clone, Object)]
pub struct IngredientChoiceResponse {
    pub id: String,
    pub name: String,
    pub price: String,
    pub included: bool,
}

#[derive(Debug, Clone, Object)]
pub struct CartProductResponse {
    pub id: String,
    pub name: String,
    pub price: String,
    pub ingredients: Vec<IngredientChoiceResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct CartSizeResponse {
    pub id: String,
    pub name: String,
    pub price: String,
    pub max_flavors: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Position in the cart; used by the item endpoints
    pub index: u32,
    pub kind: ItemKindDto,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<CartSizeResponse>,
    /// The product, or the flavors of a sized combo
    pub products: Vec<CartProductResponse>,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    pub unit_price: String,
    pub price: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub id: String,
    #[oai(skip_serializing_if_is_none)]
    pub business_id: Option<String>,
    pub items: Vec<CartItemResponse>,
    pub total: String,
}

#[derive(Debug, Clone, Object)]
pub struct SetCartBusinessRequest {
    pub business_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct IngredientToggleRequest {
    /// 0 is the product itself, then the extra flavors in request order
    pub flavor_index: u32,
    pub ingredient_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    pub product_id: String,
    /// Required when `extra_flavor_ids` is not empty
    #[oai(skip_serializing_if_is_none)]
    pub size_id: Option<String>,
    #[oai(default)]
    pub extra_flavor_ids: Vec<String>,
    #[oai(default)]
    pub ingredient_toggles: Vec<IngredientToggleRequest>,
    /// Defaults to 1
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemQuantityRequest {
    /// Must be at least 1
    pub quantity: u32,
}

impl From<IngredientToggleRequest> for IngredientToggle {
    fn from(request: IngredientToggleRequest) -> Self {
        Self {
            flavor_index: request.flavor_index as usize,
            ingredient_id: IngredientId::new(request.ingredient_id),
        }
    }
}

impl From<&IngredientChoice> for IngredientChoiceResponse {
    fn from(choice: &IngredientChoice) -> Self {
        Self {
            id: choice.id.to_string(),
            name: choice.name.clone(),
            price: format_money(&choice.price),
            included: choice.included,
        }
    }
}

impl From<&CartProduct> for CartProductResponse {
    fn from(product: &CartProduct) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_money(&product.price),
            ingredients: product.ingredients.iter().map(Into::into).collect(),
        }
    }
}

impl CartItemResponse {
    pub fn from_item(index: usize, item: &CartItem) -> Self {
        let kind = match item.selection {
            ItemSelection::Simple { .. } => ItemKindDto::Simple,
            ItemSelection::SizedCombo { .. } => ItemKindDto::SizedCombo,
        };

        Self {
            index: index as u32,
            kind,
            size: item.selection.size().map(|size| CartSizeResponse {
                id: size.id.to_string(),
                name: size.name.clone(),
                price: format_money(&size.price),
                max_flavors: size.max_flavors,
            }),
            products: item.selection.products().iter().map(Into::into).collect(),
            quantity: item.quantity,
            notes: item.notes.clone(),
            unit_price: format_money(item.selection.unit_price()),
            price: format_money(&item.price()),
        }
    }

    pub fn from_items(items: &[CartItem]) -> Vec<Self> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self::from_item(index, item))
            .collect()
    }
}

impl From<CartSession> for CartResponse {
    fn from(session: CartSession) -> Self {
        Self {
            id: session.id.to_string(),
            business_id: session.state.business_id().map(ToString::to_string),
            items: CartItemResponse::from_items(session.state.items()),
            total: format_money(session.state.total()),
        }
    }
}

use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::catalog::model::{Ingredient, Product, Size};
use crate::domain::shared::value_objects::{BusinessId, IngredientId, ProductId};

/// An ingredient of a selected product and whether the customer kept it.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientChoice {
    pub id: IngredientId,
    pub name: String,
    pub price: BigDecimal,
    pub included: bool,
}

impl From<&Ingredient> for IngredientChoice {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            price: ingredient.price.clone(),
            included: ingredient.default_included,
        }
    }
}

/// Snapshot of a product as it was when added to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub ingredients: Vec<IngredientChoice>,
}

impl CartProduct {
    /// Sum of the extra charges of the included ingredients.
    pub fn extras_price(&self) -> BigDecimal {
        self.ingredients
            .iter()
            .filter(|ingredient| ingredient.included)
            .map(|ingredient| &ingredient.price)
            .sum()
    }
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.clone(),
            ingredients: product.ingredients.iter().map(IngredientChoice::from).collect(),
        }
    }
}

/// What a cart line is made of.
///
/// A single product is priced by its own price; a sized combo is priced by
/// the size alone, however many flavors it combines.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSelection {
    Simple { product: CartProduct },
    SizedCombo { size: Size, products: Vec<CartProduct> },
}

impl ItemSelection {
    /// Builds a selection from an optional size and the chosen products.
    pub fn from_parts(size: Option<Size>, mut products: Vec<CartProduct>) -> Result<Self, CartError> {
        if products.is_empty() {
            return Err(CartError::EmptySelection);
        }

        match size {
            None if products.len() > 1 => Err(CartError::FlavorsRequireSize),
            None => Ok(ItemSelection::Simple {
                product: products.remove(0),
            }),
            Some(size) if products.len() > size.max_flavors as usize => {
                Err(CartError::TooManyFlavors {
                    max: size.max_flavors,
                })
            }
            Some(size) => Ok(ItemSelection::SizedCombo { size, products }),
        }
    }

    pub fn unit_price(&self) -> &BigDecimal {
        match self {
            ItemSelection::Simple { product } => &product.price,
            ItemSelection::SizedCombo { size, .. } => &size.price,
        }
    }

    pub fn size(&self) -> Option<&Size> {
        match self {
            ItemSelection::Simple { .. } => None,
            ItemSelection::SizedCombo { size, .. } => Some(size),
        }
    }

    pub fn products(&self) -> &[CartProduct] {
        match self {
            ItemSelection::Simple { product } => std::slice::from_ref(product),
            ItemSelection::SizedCombo { products, .. } => products,
        }
    }
}

/// One line of the order.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub selection: ItemSelection,
    pub quantity: u32,
    pub notes: Option<String>,
}

impl CartItem {
    pub fn new(selection: ItemSelection, notes: Option<String>) -> Self {
        Self {
            selection,
            quantity: 1,
            notes,
        }
    }

    /// Line price: unit price times quantity.
    pub fn price(&self) -> BigDecimal {
        self.selection.unit_price() * BigDecimal::from(self.quantity)
    }
}

/// The customer's not-yet-submitted order for one business.
///
/// `total` is never updated incrementally; every constructor derives it from
/// `items`, so it always equals the sum of the line prices.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    business_id: Option<BusinessId>,
    items: Vec<CartItem>,
    total: BigDecimal,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            business_id: None,
            items: Vec::new(),
            total: BigDecimal::zero(),
        }
    }
}

impl CartState {
    pub(crate) fn from_items(business_id: Option<BusinessId>, items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::price).sum();
        Self {
            business_id,
            items,
            total,
        }
    }

    pub fn business_id(&self) -> Option<&BusinessId> {
        self.business_id.as_ref()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> &BigDecimal {
        &self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A cart held by the storefront service on behalf of one customer.
#[derive(Debug, Clone)]
pub struct CartSession {
    pub id: Uuid,
    pub state: CartState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::SizeId;

    fn money(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    fn product(id: &str, price: &str) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: money(price),
            ingredients: vec![],
        }
    }

    fn size(max_flavors: u32, price: &str) -> Size {
        Size {
            id: SizeId::new("m"),
            business_id: BusinessId::new("biz1"),
            name: "Média".to_string(),
            price: money(price),
            max_flavors,
            description: Some("25cm - 6 fatias".to_string()),
        }
    }

    #[test]
    fn should_build_simple_selection_without_size() {
        let selection = ItemSelection::from_parts(None, vec![product("p1", "12.00")]).unwrap();

        assert!(matches!(selection, ItemSelection::Simple { .. }));
        assert_eq!(selection.unit_price(), &money("12.00"));
        assert!(selection.size().is_none());
    }

    #[test]
    fn should_price_sized_combo_by_size_only() {
        let selection = ItemSelection::from_parts(
            Some(size(2, "35.90")),
            vec![product("p1", "50.00"), product("p2", "70.00")],
        )
        .unwrap();

        assert_eq!(selection.unit_price(), &money("35.90"));
        assert_eq!(selection.products().len(), 2);
    }

    #[test]
    fn should_reject_empty_selection() {
        assert!(matches!(
            ItemSelection::from_parts(None, vec![]),
            Err(CartError::EmptySelection)
        ));
        assert!(matches!(
            ItemSelection::from_parts(Some(size(2, "35.90")), vec![]),
            Err(CartError::EmptySelection)
        ));
    }

    #[test]
    fn should_reject_several_products_without_size() {
        let result =
            ItemSelection::from_parts(None, vec![product("p1", "1.00"), product("p2", "2.00")]);

        assert!(matches!(result, Err(CartError::FlavorsRequireSize)));
    }

    #[test]
    fn should_reject_more_flavors_than_size_allows() {
        let result = ItemSelection::from_parts(
            Some(size(1, "25.90")),
            vec![product("p1", "0"), product("p2", "0")],
        );

        assert!(matches!(result, Err(CartError::TooManyFlavors { max: 1 })));
    }

    #[test]
    fn should_multiply_unit_price_by_quantity() {
        let mut item = CartItem::new(
            ItemSelection::from_parts(Some(size(2, "35.90")), vec![product("p1", "0")]).unwrap(),
            None,
        );
        item.quantity = 3;

        assert_eq!(item.price(), money("107.70"));
    }

    #[test]
    fn should_sum_only_included_extras() {
        let mut cart_product = product("p1", "30.00");
        cart_product.ingredients = vec![
            IngredientChoice {
                id: IngredientId::new("bacon"),
                name: "Bacon".to_string(),
                price: money("4.50"),
                included: true,
            },
            IngredientChoice {
                id: IngredientId::new("catupiry"),
                name: "Catupiry".to_string(),
                price: money("3.00"),
                included: false,
            },
        ];

        assert_eq!(cart_product.extras_price(), money("4.50"));
    }

    #[test]
    fn should_start_empty_and_unbound() {
        let state = CartState::default();

        assert!(state.business_id().is_none());
        assert!(state.is_empty());
        assert_eq!(state.total(), &BigDecimal::zero());
    }
}

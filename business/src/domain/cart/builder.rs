use bigdecimal::BigDecimal;

use super::engine::CartAction;
use super::errors::CartError;
use super::model::{CartProduct, ItemSelection};
use crate::domain::catalog::model::{Product, Size};
use crate::domain::shared::value_objects::IngredientId;

/// Customisation of a single item before it goes into the cart.
///
/// The first flavor is always the product the customer opened; further
/// flavors are only allowed when that product accepts them and a size is
/// selected that has room for them.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    base: Product,
    size: Option<Size>,
    flavors: Vec<CartProduct>,
    quantity: u32,
    notes: Option<String>,
}

impl ItemBuilder {
    /// Starts with the first offered size selected, if any.
    pub fn new(product: Product, sizes: &[Size]) -> Self {
        let first = CartProduct::from(&product);
        Self {
            base: product,
            size: sizes.first().cloned(),
            flavors: vec![first],
            quantity: 1,
            notes: None,
        }
    }

    pub fn size(&self) -> Option<&Size> {
        self.size.as_ref()
    }

    pub fn flavors(&self) -> &[CartProduct] {
        &self.flavors
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Switching size keeps only the base flavor.
    pub fn select_size(&mut self, size: Size) {
        self.size = Some(size);
        self.flavors.truncate(1);
    }

    pub fn add_flavor(&mut self, product: &Product) -> Result<(), CartError> {
        let size = self.size.as_ref().ok_or(CartError::FlavorsRequireSize)?;
        if !self.base.allows_multiple_flavors {
            return Err(CartError::MultipleFlavorsNotAllowed);
        }
        if self.flavors.len() >= size.max_flavors as usize {
            return Err(CartError::TooManyFlavors {
                max: size.max_flavors,
            });
        }
        if self.flavors.iter().any(|flavor| flavor.id == product.id) {
            return Err(CartError::DuplicateFlavor);
        }

        self.flavors.push(CartProduct::from(product));
        Ok(())
    }

    pub fn remove_flavor(&mut self, index: usize) -> Result<(), CartError> {
        if index == 0 {
            return Err(CartError::CannotRemoveBaseFlavor);
        }
        if index >= self.flavors.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.flavors.len(),
            });
        }

        self.flavors.remove(index);
        Ok(())
    }

    pub fn toggle_ingredient(
        &mut self,
        flavor_index: usize,
        ingredient_id: &IngredientId,
    ) -> Result<(), CartError> {
        let len = self.flavors.len();
        let flavor = self
            .flavors
            .get_mut(flavor_index)
            .ok_or(CartError::IndexOutOfRange {
                index: flavor_index,
                len,
            })?;
        let ingredient = flavor
            .ingredients
            .iter_mut()
            .find(|ingredient| &ingredient.id == ingredient_id)
            .ok_or(CartError::UnknownIngredient)?;

        ingredient.included = !ingredient.included;
        Ok(())
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never drops below one.
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
    }

    /// Price shown while customising: base price plus included ingredient
    /// extras of every flavor, times quantity.
    ///
    /// The cart prices lines by size or product price only, so this can be
    /// higher than what the line adds to the cart total.
    pub fn preview_total(&self) -> BigDecimal {
        let base = match &self.size {
            Some(size) => size.price.clone(),
            None => self.base.price.clone(),
        };
        let extras: BigDecimal = self.flavors.iter().map(CartProduct::extras_price).sum();
        (base + extras) * BigDecimal::from(self.quantity)
    }

    /// Actions that put this item into a cart currently holding `cart_len` lines.
    pub fn into_actions(self, cart_len: usize) -> Result<Vec<CartAction>, CartError> {
        let quantity = self.quantity;
        let selection = ItemSelection::from_parts(self.size, self.flavors)?;

        let mut actions = vec![CartAction::AddToCart {
            selection,
            notes: self.notes,
        }];
        if quantity > 1 {
            actions.push(CartAction::UpdateQuantity {
                index: cart_len,
                quantity,
            });
        }
        Ok(actions)
    }
}

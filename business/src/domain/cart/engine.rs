use super::errors::CartError;
use super::model::{CartItem, CartState, ItemSelection};
use crate::domain::shared::value_objects::BusinessId;

/// A state transition requested by the storefront.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Binds the cart to a business, discarding items from any other one.
    SetBusiness(BusinessId),
    /// Appends a new line with quantity 1. Identical lines are not merged.
    AddToCart {
        selection: ItemSelection,
        notes: Option<String>,
    },
    RemoveFromCart {
        index: usize,
    },
    UpdateQuantity {
        index: usize,
        quantity: u32,
    },
    /// Empties the cart but keeps its business.
    ClearCart,
}

/// Computes the next cart state.
///
/// The input is never mutated; on error the caller keeps its current state.
/// Lines are addressed by position, so indices shift after a removal.
pub fn apply(state: &CartState, action: CartAction) -> Result<CartState, CartError> {
    match action {
        CartAction::SetBusiness(business_id) => {
            let switching = state
                .business_id()
                .is_some_and(|current| current != &business_id);
            let items = if switching {
                Vec::new()
            } else {
                state.items().to_vec()
            };
            Ok(CartState::from_items(Some(business_id), items))
        }
        CartAction::AddToCart { selection, notes } => {
            let mut items = state.items().to_vec();
            items.push(CartItem::new(selection, notes));
            Ok(CartState::from_items(state.business_id().cloned(), items))
        }
        CartAction::RemoveFromCart { index } => {
            check_index(state, index)?;
            let mut items = state.items().to_vec();
            items.remove(index);
            Ok(CartState::from_items(state.business_id().cloned(), items))
        }
        CartAction::UpdateQuantity { index, quantity } => {
            if quantity == 0 {
                return Err(CartError::InvalidQuantity);
            }
            check_index(state, index)?;
            let items = state
                .items()
                .iter()
                .enumerate()
                .map(|(position, item)| {
                    let mut item = item.clone();
                    if position == index {
                        item.quantity = quantity;
                    }
                    item
                })
                .collect();
            Ok(CartState::from_items(state.business_id().cloned(), items))
        }
        CartAction::ClearCart => Ok(CartState::from_items(
            state.business_id().cloned(),
            Vec::new(),
        )),
    }
}

fn check_index(state: &CartState, index: usize) -> Result<(), CartError> {
    let len = state.items().len();
    if index >= len {
        return Err(CartError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Owns the cart of one session and applies actions to it in order.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: CartState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn dispatch(&mut self, action: CartAction) -> Result<(), CartError> {
        self.state = apply(&self.state, action)?;
        Ok(())
    }

    pub fn into_state(self) -> CartState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartProduct;
    use crate::domain::catalog::model::Size;
    use crate::domain::shared::value_objects::{ProductId, SizeId};
    use bigdecimal::BigDecimal;
    use num_traits::Zero;

    fn money(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    fn product(id: &str, price: &str) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: id.to_string(),
            price: money(price),
            ingredients: vec![],
        }
    }

    fn medium() -> Size {
        Size {
            id: SizeId::new("m"),
            business_id: BusinessId::new("biz1"),
            name: "Média".to_string(),
            price: money("35.90"),
            max_flavors: 2,
            description: None,
        }
    }

    fn add_simple(id: &str, price: &str) -> CartAction {
        CartAction::AddToCart {
            selection: ItemSelection::Simple {
                product: product(id, price),
            },
            notes: None,
        }
    }

    fn add_medium(id: &str) -> CartAction {
        CartAction::AddToCart {
            selection: ItemSelection::SizedCombo {
                size: medium(),
                products: vec![product(id, "0")],
            },
            notes: None,
        }
    }

    #[test]
    fn should_follow_checkout_scenario_step_by_step() {
        let mut store = CartStore::new();
        assert!(store.state().business_id().is_none());

        store.dispatch(CartAction::SetBusiness(BusinessId::new("biz1"))).unwrap();
        assert_eq!(store.state().business_id(), Some(&BusinessId::new("biz1")));
        assert!(store.state().is_empty());
        assert_eq!(store.state().total(), &BigDecimal::zero());

        store.dispatch(add_medium("p1")).unwrap();
        assert_eq!(store.state().items().len(), 1);
        assert_eq!(store.state().items()[0].quantity, 1);
        assert_eq!(store.state().total(), &money("35.90"));

        store
            .dispatch(CartAction::UpdateQuantity {
                index: 0,
                quantity: 3,
            })
            .unwrap();
        assert_eq!(store.state().items()[0].quantity, 3);
        assert_eq!(store.state().total(), &money("107.70"));

        store.dispatch(add_simple("p2", "12.00")).unwrap();
        assert_eq!(store.state().items().len(), 2);
        assert_eq!(store.state().total(), &money("119.70"));

        store.dispatch(CartAction::RemoveFromCart { index: 0 }).unwrap();
        assert_eq!(store.state().items().len(), 1);
        assert_eq!(
            store.state().items()[0].selection.products()[0].id,
            ProductId::new("p2")
        );
        assert_eq!(store.state().total(), &money("12.00"));

        store.dispatch(CartAction::SetBusiness(BusinessId::new("biz2"))).unwrap();
        assert_eq!(store.state().business_id(), Some(&BusinessId::new("biz2")));
        assert!(store.state().is_empty());
        assert_eq!(store.state().total(), &BigDecimal::zero());
    }

    #[test]
    fn should_keep_items_when_binding_unbound_cart() {
        let mut store = CartStore::new();
        store.dispatch(add_simple("p1", "10.00")).unwrap();

        store.dispatch(CartAction::SetBusiness(BusinessId::new("biz1"))).unwrap();

        assert_eq!(store.state().items().len(), 1);
        assert_eq!(store.state().total(), &money("10.00"));
    }

    #[test]
    fn should_keep_items_when_business_unchanged() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::SetBusiness(BusinessId::new("biz1"))).unwrap();
        store.dispatch(add_simple("p1", "10.00")).unwrap();

        store.dispatch(CartAction::SetBusiness(BusinessId::new("biz1"))).unwrap();

        assert_eq!(store.state().items().len(), 1);
    }

    #[test]
    fn should_never_merge_identical_lines() {
        let mut store = CartStore::new();
        store.dispatch(add_simple("p1", "10.00")).unwrap();
        store.dispatch(add_simple("p1", "10.00")).unwrap();

        assert_eq!(store.state().items().len(), 2);
        assert_eq!(store.state().total(), &money("20.00"));
    }

    #[test]
    fn should_keep_business_on_clear() {
        let mut store = CartStore::new();
        store.dispatch(CartAction::SetBusiness(BusinessId::new("biz1"))).unwrap();
        store.dispatch(add_simple("p1", "10.00")).unwrap();

        store.dispatch(CartAction::ClearCart).unwrap();

        assert!(store.state().is_empty());
        assert_eq!(store.state().business_id(), Some(&BusinessId::new("biz1")));
    }

    #[test]
    fn should_reject_removal_out_of_range_and_keep_state() {
        let mut store = CartStore::new();
        store.dispatch(add_simple("p1", "10.00")).unwrap();
        let before = store.state().clone();

        let result = store.dispatch(CartAction::RemoveFromCart { index: 1 });

        assert!(matches!(
            result,
            Err(CartError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn should_reject_quantity_update_out_of_range() {
        let mut store = CartStore::new();

        let result = store.dispatch(CartAction::UpdateQuantity {
            index: 0,
            quantity: 2,
        });

        assert!(matches!(
            result,
            Err(CartError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn should_reject_zero_quantity() {
        let mut store = CartStore::new();
        store.dispatch(add_simple("p1", "10.00")).unwrap();

        let result = store.dispatch(CartAction::UpdateQuantity {
            index: 0,
            quantity: 0,
        });

        assert!(matches!(result, Err(CartError::InvalidQuantity)));
        assert_eq!(store.state().items()[0].quantity, 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn recomputed(state: &CartState) -> BigDecimal {
            state.items().iter().map(CartItem::price).sum()
        }

        fn price_strategy() -> impl Strategy<Value = BigDecimal> {
            (0i64..100_000).prop_map(|cents| BigDecimal::new(cents.into(), 2))
        }

        fn action_strategy() -> impl Strategy<Value = CartAction> {
            prop_oneof![
                price_strategy().prop_map(|price| CartAction::AddToCart {
                    selection: ItemSelection::Simple {
                        product: CartProduct {
                            id: ProductId::new("p"),
                            name: "p".to_string(),
                            price,
                            ingredients: vec![],
                        },
                    },
                    notes: None,
                }),
                price_strategy().prop_map(|price| CartAction::AddToCart {
                    selection: ItemSelection::SizedCombo {
                        size: Size {
                            price,
                            ..medium()
                        },
                        products: vec![product("a", "1.00"), product("b", "2.00")],
                    },
                    notes: None,
                }),
                (0usize..8).prop_map(|index| CartAction::RemoveFromCart { index }),
                (0usize..8, 0u32..6)
                    .prop_map(|(index, quantity)| CartAction::UpdateQuantity { index, quantity }),
                Just(CartAction::ClearCart),
                prop_oneof![Just("biz1"), Just("biz2")]
                    .prop_map(|id| CartAction::SetBusiness(BusinessId::new(id))),
            ]
        }

        proptest! {
            #[test]
            fn total_always_matches_line_prices(actions in prop::collection::vec(action_strategy(), 0..40)) {
                let mut store = CartStore::new();
                for action in actions {
                    let before = store.state().clone();
                    if store.dispatch(action).is_err() {
                        prop_assert_eq!(store.state(), &before);
                    }
                    prop_assert_eq!(store.state().total(), &recomputed(store.state()));
                }
            }

            #[test]
            fn removal_leaves_no_drift(prices in prop::collection::vec(price_strategy(), 1..10), pick in any::<prop::sample::Index>()) {
                let mut store = CartStore::new();
                for price in prices {
                    store.dispatch(CartAction::AddToCart {
                        selection: ItemSelection::Simple {
                            product: CartProduct {
                                id: ProductId::new("p"),
                                name: "p".to_string(),
                                price,
                                ingredients: vec![],
                            },
                        },
                        notes: None,
                    }).unwrap();
                }
                let index = pick.index(store.state().items().len());

                store.dispatch(CartAction::RemoveFromCart { index }).unwrap();

                prop_assert_eq!(store.state().total(), &recomputed(store.state()));
            }

            #[test]
            fn switching_business_empties_cart(count in 1usize..6) {
                let mut store = CartStore::new();
                store.dispatch(CartAction::SetBusiness(BusinessId::new("a"))).unwrap();
                for _ in 0..count {
                    store.dispatch(add_medium("p1")).unwrap();
                }

                let mut same = store.clone();
                same.dispatch(CartAction::SetBusiness(BusinessId::new("a"))).unwrap();
                prop_assert_eq!(same.state().items(), store.state().items());

                store.dispatch(CartAction::SetBusiness(BusinessId::new("b"))).unwrap();
                prop_assert!(store.state().is_empty());
                prop_assert_eq!(store.state().total(), &BigDecimal::zero());
            }

            #[test]
            fn clear_is_idempotent(actions in prop::collection::vec(action_strategy(), 0..20)) {
                let mut store = CartStore::new();
                for action in actions {
                    let _ = store.dispatch(action);
                }

                store.dispatch(CartAction::ClearCart).unwrap();
                let once = store.state().clone();
                store.dispatch(CartAction::ClearCart).unwrap();

                prop_assert_eq!(store.state(), &once);
            }
        }
    }
}

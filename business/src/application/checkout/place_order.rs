use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::engine::{self, CartAction};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::OrderSummary;
use crate::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderSummary, CheckoutError> {
        self.logger
            .info(&format!("Placing order for cart {}", params.session_id));

        let customer = params.customer.validated()?;

        let cart = self
            .repository
            .get(params.session_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CheckoutError::SessionNotFound,
                other => CheckoutError::Repository(other),
            })?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let business_id = cart
            .business_id()
            .cloned()
            .ok_or(CheckoutError::BusinessNotSelected)?;

        let business = self
            .catalog
            .get_business(&business_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CheckoutError::BusinessNotFound,
                other => CheckoutError::Repository(other),
            })?;
        if !business.is_open_at(params.at) {
            self.logger.warn(&format!(
                "Cart {} checked out while business {} is closed",
                params.session_id, business.id
            ));
        }

        let summary = OrderSummary::new(business_id, &cart, business.delivery_fee, customer);
        summary.ensure_change_covers_total()?;

        // Only the cart the summary was built from may be cleared.
        self.repository
            .update(
                params.session_id,
                Box::new(move |current| {
                    if current != &cart {
                        return Err(CartError::ConcurrentChange);
                    }
                    engine::apply(current, CartAction::ClearCart)
                }),
            )
            .await
            .map_err(|e| match e {
                CartError::SessionNotFound => CheckoutError::SessionNotFound,
                CartError::ConcurrentChange => CheckoutError::CartChanged,
                CartError::Repository(inner) => CheckoutError::Repository(inner),
                other => CheckoutError::Cart(other),
            })?;

        self.logger.info(&format!(
            "Order for cart {} placed: {} items, total {}",
            params.session_id,
            summary.items.len(),
            summary.total
        ));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        MockCartSessionRepo, MockCatalogRepo, business, mock_logger, money,
    };
    use crate::domain::cart::engine::CartStore;
    use crate::domain::cart::model::{CartProduct, CartState, ItemSelection};
    use crate::domain::checkout::model::{CustomerInfo, PaymentMethod};
    use crate::domain::shared::value_objects::{BusinessId, ProductId};
    use chrono::{NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Maria Silva".to_string(),
            phone: "11999990000".to_string(),
            address: "Rua das Flores, 123".to_string(),
            complement: Some("Apto 12".to_string()),
            payment_method: PaymentMethod::Cash,
            change_for: Some(money("100")),
        }
    }

    fn params(customer: CustomerInfo) -> PlaceOrderParams {
        PlaceOrderParams {
            session_id: Uuid::new_v4(),
            customer,
            at: noon(),
        }
    }

    fn filled_cart(business_id: Option<&str>) -> CartState {
        let mut store = CartStore::new();
        if let Some(id) = business_id {
            store
                .dispatch(CartAction::SetBusiness(BusinessId::new(id)))
                .unwrap();
        }
        store
            .dispatch(CartAction::AddToCart {
                selection: ItemSelection::Simple {
                    product: CartProduct {
                        id: ProductId::new("p1"),
                        name: "Pizza Calabresa".to_string(),
                        price: money("40.00"),
                        ingredients: vec![],
                    },
                },
                notes: None,
            })
            .unwrap();
        store
            .dispatch(CartAction::UpdateQuantity {
                index: 0,
                quantity: 2,
            })
            .unwrap();
        store.into_state()
    }

    fn catalog() -> MockCatalogRepo {
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_get_business()
            .returning(|id| match id.as_str() {
                "biz1" => Ok(business("biz1")),
                _ => Err(RepositoryError::NotFound),
            });
        catalog
    }

    fn use_case(mock_repo: MockCartSessionRepo) -> PlaceOrderUseCaseImpl {
        PlaceOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            catalog: Arc::new(catalog()),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_summarize_order_and_clear_cart() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Ok(filled_cart(Some("biz1"))));
        mock_repo.expect_update().times(1).returning(|_, transition| {
            let cleared = transition(&filled_cart(Some("biz1")))?;
            assert!(cleared.is_empty());
            assert_eq!(cleared.business_id(), Some(&BusinessId::new("biz1")));
            Ok(cleared)
        });

        let summary = use_case(mock_repo).execute(params(customer())).await.unwrap();

        assert_eq!(summary.business_id, BusinessId::new("biz1"));
        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.subtotal, money("80.00"));
        assert_eq!(summary.delivery_fee, money("5.00"));
        assert_eq!(summary.total, money("85.00"));
        assert_eq!(summary.customer.complement.as_deref(), Some("Apto 12"));
    }

    #[tokio::test]
    async fn should_reject_empty_cart() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Ok(CartState::default()));
        mock_repo.expect_update().never();

        let result = use_case(mock_repo).execute(params(customer())).await;

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[tokio::test]
    async fn should_reject_cart_without_business() {
        let state = filled_cart(None);
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_get().returning(move |_| Ok(state.clone()));
        mock_repo.expect_update().never();

        let result = use_case(mock_repo).execute(params(customer())).await;

        assert!(matches!(result, Err(CheckoutError::BusinessNotSelected)));
    }

    #[tokio::test]
    async fn should_reject_missing_customer_field_before_loading_cart() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_get().never();
        mock_repo.expect_update().never();
        let mut info = customer();
        info.phone = "  ".to_string();

        let result = use_case(mock_repo).execute(params(info)).await;

        assert!(matches!(
            result,
            Err(CheckoutError::MissingCustomerField { field: "phone" })
        ));
    }

    #[tokio::test]
    async fn should_return_business_not_found() {
        let state = filled_cart(Some("gone"));
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_get().returning(move |_| Ok(state.clone()));
        mock_repo.expect_update().never();

        let result = use_case(mock_repo).execute(params(customer())).await;

        assert!(matches!(result, Err(CheckoutError::BusinessNotFound)));
    }

    #[tokio::test]
    async fn should_return_session_not_found() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(mock_repo).execute(params(customer())).await;

        assert!(matches!(result, Err(CheckoutError::SessionNotFound)));
    }

    #[tokio::test]
    async fn should_reject_change_below_total() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Ok(filled_cart(Some("biz1"))));
        mock_repo.expect_update().never();
        let mut info = customer();
        info.change_for = Some(money("50.00"));

        let result = use_case(mock_repo).execute(params(info)).await;

        assert!(matches!(result, Err(CheckoutError::InsufficientChange)));
    }

    #[tokio::test]
    async fn should_keep_cart_that_changed_during_checkout() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Ok(filled_cart(Some("biz1"))));
        // another request bumps the quantity before the cart is cleared
        mock_repo.expect_update().times(1).returning(|_, transition| {
            let grown = engine::apply(
                &filled_cart(Some("biz1")),
                CartAction::UpdateQuantity {
                    index: 0,
                    quantity: 5,
                },
            )?;
            transition(&grown)
        });

        let result = use_case(mock_repo).execute(params(customer())).await;

        assert!(matches!(result, Err(CheckoutError::CartChanged)));
    }
}

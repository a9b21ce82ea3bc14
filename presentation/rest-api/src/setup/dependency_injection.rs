use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart_session::repository::CartSessionRepositoryMemory;
use persistence::catalog::repository::CatalogRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::set_business::SetCartBusinessUseCaseImpl;
use business::application::cart::start::StartCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::catalog::get_menu::GetMenuUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;

use crate::config::storefront_config::StorefrontConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub menu_api: crate::api::menu::routes::MenuApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, storefront: &StorefrontConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog = Arc::new(CatalogRepositoryPostgres::new(
            pool,
            storefront.default_delivery_fee.clone(),
        ));
        let carts = Arc::new(CartSessionRepositoryMemory::new());

        // Catalog use cases
        let get_menu_use_case = Arc::new(GetMenuUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let start_use_case = Arc::new(StartCartUseCaseImpl {
            repository: carts.clone(),
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetCartUseCaseImpl {
            repository: carts.clone(),
            logger: logger.clone(),
        });
        let set_business_use_case = Arc::new(SetCartBusinessUseCaseImpl {
            repository: carts.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: carts.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            repository: carts.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: carts.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: carts.clone(),
            logger: logger.clone(),
        });

        // Checkout use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            repository: carts,
            catalog,
            logger,
        });

        let menu_api = crate::api::menu::routes::MenuApi::new(get_menu_use_case);

        let cart_api = crate::api::cart::routes::CartApi::new(
            start_use_case,
            get_use_case,
            set_business_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        );

        let checkout_api = crate::api::checkout::routes::CheckoutApi::new(place_order_use_case);

        Ok(Self {
            health_api,
            menu_api,
            cart_api,
            checkout_api,
        })
    }
}

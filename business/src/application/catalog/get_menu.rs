use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Menu;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_menu::{GetMenuParams, GetMenuUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetMenuUseCaseImpl {
    pub catalog: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMenuUseCase for GetMenuUseCaseImpl {
    async fn execute(&self, params: GetMenuParams) -> Result<Menu, CatalogError> {
        self.logger
            .info(&format!("Loading menu of business {}", params.business_id));

        let business = self
            .catalog
            .get_business(&params.business_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::BusinessNotFound,
                other => CatalogError::Repository(other),
            })?;

        let products = self
            .catalog
            .get_products(&business.id)
            .await?
            .into_iter()
            .filter(|product| product.in_stock)
            .collect::<Vec<_>>();
        let sizes = self.catalog.get_sizes(&business.id).await?;
        let is_open = business.is_open_at(params.at);

        self.logger.info(&format!(
            "Menu of {}: {} products, {} sizes, open: {}",
            business.id,
            products.len(),
            sizes.len(),
            is_open
        ));

        Ok(Menu {
            business,
            is_open,
            products,
            sizes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockCatalogRepo, business, mock_logger, product, size};
    use crate::domain::shared::value_objects::{BusinessId, ProductId};
    use crate::domain::storefront::hours::{BusinessHours, OpeningHours};
    use chrono::{NaiveDate, NaiveDateTime, Weekday};

    // 2024-06-03 is a Monday
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn catalog_with_hours(hours: BusinessHours) -> MockCatalogRepo {
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_get_business().returning(move |id| {
            let mut found = business(id.as_str());
            found.hours = hours.clone();
            Ok(found)
        });
        catalog.expect_get_products().returning(|_| {
            let mut sold_out = product("margherita", "biz1", "38.00");
            sold_out.in_stock = false;
            Ok(vec![product("calabresa", "biz1", "40.00"), sold_out])
        });
        catalog
            .expect_get_sizes()
            .returning(|_| Ok(vec![size("m", "biz1", "35.90", 2)]));
        catalog
    }

    #[tokio::test]
    async fn should_list_only_products_in_stock() {
        let use_case = GetMenuUseCaseImpl {
            catalog: Arc::new(catalog_with_hours(BusinessHours::default())),
            logger: mock_logger(),
        };

        let menu = use_case
            .execute(GetMenuParams {
                business_id: BusinessId::new("biz1"),
                at: monday_at(12, 0),
            })
            .await
            .unwrap();

        assert_eq!(menu.products.len(), 1);
        assert_eq!(menu.products[0].id, ProductId::new("calabresa"));
        assert_eq!(menu.sizes.len(), 1);
        assert!(menu.is_open);
    }

    #[tokio::test]
    async fn should_report_closed_outside_opening_hours() {
        let hours = BusinessHours::default()
            .with_day(Weekday::Mon, OpeningHours::parse("18:00", "23:00").unwrap());
        let use_case = GetMenuUseCaseImpl {
            catalog: Arc::new(catalog_with_hours(hours)),
            logger: mock_logger(),
        };

        let before = use_case
            .execute(GetMenuParams {
                business_id: BusinessId::new("biz1"),
                at: monday_at(17, 59),
            })
            .await
            .unwrap();
        let at_closing = use_case
            .execute(GetMenuParams {
                business_id: BusinessId::new("biz1"),
                at: monday_at(23, 0),
            })
            .await
            .unwrap();

        assert!(!before.is_open);
        assert!(at_closing.is_open);
    }

    #[tokio::test]
    async fn should_return_business_not_found() {
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_get_business()
            .returning(|_| Err(RepositoryError::NotFound));
        catalog.expect_get_products().never();

        let use_case = GetMenuUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetMenuParams {
                business_id: BusinessId::new("missing"),
                at: monday_at(12, 0),
            })
            .await;

        assert!(matches!(result, Err(CatalogError::BusinessNotFound)));
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_get_business()
            .returning(|id| Ok(business(id.as_str())));
        catalog
            .expect_get_products()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetMenuUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetMenuParams {
                business_id: BusinessId::new("biz1"),
                at: monday_at(12, 0),
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Repository(_))));
    }
}

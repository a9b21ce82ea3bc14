use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::catalog::model::{Ingredient, Product, Size};
use business::domain::catalog::value_objects::PriceUnit;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{BusinessId, IngredientId, ProductId, SizeId};
use business::domain::storefront::hours::{BusinessHours, OpeningHours};
use business::domain::storefront::model::Business;
use chrono::Weekday;

/// One day of the `business_hours` JSON column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHoursRecord {
    pub open: String,
    pub close: String,
}

/// The `business_hours` JSON column, keyed by lowercase weekday name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessHoursRecord {
    pub sunday: Option<DayHoursRecord>,
    pub monday: Option<DayHoursRecord>,
    pub tuesday: Option<DayHoursRecord>,
    pub wednesday: Option<DayHoursRecord>,
    pub thursday: Option<DayHoursRecord>,
    pub friday: Option<DayHoursRecord>,
    pub saturday: Option<DayHoursRecord>,
}

impl BusinessHoursRecord {
    pub fn into_domain(self) -> Result<BusinessHours, RepositoryError> {
        let days = [
            (Weekday::Sun, self.sunday),
            (Weekday::Mon, self.monday),
            (Weekday::Tue, self.tuesday),
            (Weekday::Wed, self.wednesday),
            (Weekday::Thu, self.thursday),
            (Weekday::Fri, self.friday),
            (Weekday::Sat, self.saturday),
        ];

        let mut hours = BusinessHours::default();
        for (day, record) in days {
            if let Some(record) = record {
                let opening = OpeningHours::parse(&record.open, &record.close)
                    .map_err(|_| RepositoryError::InvalidData)?;
                hours.set(day, Some(opening));
            }
        }
        Ok(hours)
    }
}

#[derive(Debug, FromRow)]
pub struct BusinessEntity {
    pub id: String,
    pub name: String,
    pub whatsapp: Option<String>,
    pub delivery_fee: Option<BigDecimal>,
    pub business_hours: Option<Json<BusinessHoursRecord>>,
}

impl BusinessEntity {
    /// `default_delivery_fee` applies when the row has none.
    pub fn into_domain(self, default_delivery_fee: &BigDecimal) -> Result<Business, RepositoryError> {
        let hours = match self.business_hours {
            Some(Json(record)) => record.into_domain()?,
            None => BusinessHours::default(),
        };

        Ok(Business {
            id: BusinessId::new(self.id),
            name: self.name,
            whatsapp: self.whatsapp.filter(|w| !w.trim().is_empty()),
            delivery_fee: self
                .delivery_fee
                .unwrap_or_else(|| default_delivery_fee.clone()),
            hours,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct IngredientEntity {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub default_included: bool,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Ingredient {
        Ingredient {
            id: IngredientId::new(self.id),
            name: self.name,
            price: self.price,
            default_included: self.default_included,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub price_unit: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: bool,
    pub category: Option<String>,
    pub allows_multiple_flavors: bool,
}

impl ProductEntity {
    pub fn into_domain(self, ingredients: Vec<Ingredient>) -> Product {
        Product {
            id: ProductId::new(self.id),
            business_id: BusinessId::new(self.business_id),
            name: self.name,
            description: self.description,
            price: self.price,
            price_unit: self
                .price_unit
                .and_then(|unit| unit.parse::<PriceUnit>().ok())
                .unwrap_or_default(),
            image_url: self.image_url,
            in_stock: self.in_stock,
            category: self.category,
            allows_multiple_flavors: self.allows_multiple_flavors,
            ingredients,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct SizeEntity {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub max_flavors: i32,
    pub description: Option<String>,
}

impl SizeEntity {
    pub fn into_domain(self) -> Size {
        Size {
            id: SizeId::new(self.id),
            business_id: BusinessId::new(self.business_id),
            name: self.name,
            price: self.price,
            // a size always holds at least the product itself
            max_flavors: u32::try_from(self.max_flavors).unwrap_or(1).max(1),
            description: self.description,
        }
    }
}

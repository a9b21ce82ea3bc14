use chrono::Weekday;
use poem_openapi::Object;

use business::domain::catalog::model::{Ingredient, Menu, Product, Size};
use business::domain::storefront::hours::BusinessHours;
use business::domain::storefront::model::Business;

use crate::api::money::format_money;

const WEEK: [(Weekday, &str); 7] = [
    (Weekday::Sun, "sunday"),
    (Weekday::Mon, "monday"),
    (Weekday::Tue, "tuesday"),
    (Weekday::Wed, "wednesday"),
    (Weekday::Thu, "thursday"),
    (Weekday::Fri, "friday"),
    (Weekday::Sat, "saturday"),
];

#[derive(Debug, Clone, Object)]
pub struct DayHoursResponse {
    /// Lowercase weekday name
    pub day: String,
    /// Opening time, `HH:MM`
    pub open: String,
    /// Closing time, `HH:MM`, inclusive
    pub close: String,
}

#[derive(Debug, Clone, Object)]
pub struct BusinessResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub whatsapp: Option<String>,
    pub delivery_fee: String,
    /// Only days with configured hours are listed
    pub hours: Vec<DayHoursResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
    /// Extra charge when included
    pub price: String,
    pub default_included: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: String,
    pub price_unit: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub allows_multiple_flavors: bool,
    pub ingredients: Vec<IngredientResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct SizeResponse {
    pub id: String,
    pub name: String,
    pub price: String,
    pub max_flavors: u32,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct MenuResponse {
    pub business: BusinessResponse,
    /// Whether the business takes orders right now
    pub is_open: bool,
    pub products: Vec<ProductResponse>,
    pub sizes: Vec<SizeResponse>,
}

fn hours_response(hours: &BusinessHours) -> Vec<DayHoursResponse> {
    WEEK.iter()
        .filter_map(|(day, name)| {
            hours.get(*day).map(|opening| DayHoursResponse {
                day: name.to_string(),
                open: opening.open().format("%H:%M").to_string(),
                close: opening.close().format("%H:%M").to_string(),
            })
        })
        .collect()
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            hours: hours_response(&business.hours),
            id: business.id.to_string(),
            name: business.name,
            whatsapp: business.whatsapp,
            delivery_fee: format_money(&business.delivery_fee),
        }
    }
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.to_string(),
            name: ingredient.name,
            price: format_money(&ingredient.price),
            default_included: ingredient.default_included,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: format_money(&product.price),
            price_unit: product.price_unit.to_string(),
            image_url: product.image_url,
            category: product.category,
            allows_multiple_flavors: product.allows_multiple_flavors,
            ingredients: product.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Size> for SizeResponse {
    fn from(size: Size) -> Self {
        Self {
            id: size.id.to_string(),
            name: size.name,
            price: format_money(&size.price),
            max_flavors: size.max_flavors,
            description: size.description,
        }
    }
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            business: menu.business.into(),
            is_open: menu.is_open,
            products: menu.products.into_iter().map(Into::into).collect(),
            sizes: menu.sizes.into_iter().map(Into::into).collect(),
        }
    }
}

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDateTime};

use super::hours::BusinessHours;
use crate::domain::shared::value_objects::BusinessId;

/// Fee charged when a business has none configured.
pub fn default_delivery_fee() -> BigDecimal {
    BigDecimal::from(5)
}

/// A tenant storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub whatsapp: Option<String>,
    pub delivery_fee: BigDecimal,
    pub hours: BusinessHours,
}

impl Business {
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.hours.is_open_at(at.weekday(), at.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storefront::hours::OpeningHours;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn should_use_weekday_and_time_of_timestamp() {
        let business = Business {
            id: BusinessId::new("biz1"),
            name: "Pizzaria Napoli".to_string(),
            whatsapp: None,
            delivery_fee: default_delivery_fee(),
            hours: BusinessHours::default()
                .with_day(Weekday::Sun, OpeningHours::parse("11:00", "15:00").unwrap()),
        };
        // 2024-06-02 is a Sunday
        let sunday_noon = NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let monday_noon = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        assert!(business.is_open_at(sunday_noon));
        assert!(!business.is_open_at(monday_noon));
    }

    #[test]
    fn should_default_delivery_fee_to_five() {
        assert_eq!(default_delivery_fee(), "5.00".parse::<BigDecimal>().unwrap());
    }
}

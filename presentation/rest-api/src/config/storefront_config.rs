use bigdecimal::BigDecimal;
use std::env;

/// Storefront-wide settings
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Fee for businesses without their own delivery fee
    pub default_delivery_fee: BigDecimal,
}

impl StorefrontConfig {
    /// Load storefront configuration from environment variables
    ///
    /// Environment variables:
    /// - DEFAULT_DELIVERY_FEE: decimal amount (default: "5.00")
    pub fn from_env() -> Self {
        Self::from_value(env::var("DEFAULT_DELIVERY_FEE").ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let default_delivery_fee = value
            .and_then(|raw| raw.trim().parse::<BigDecimal>().ok())
            .filter(|fee| fee >= &BigDecimal::from(0))
            .unwrap_or_else(|| BigDecimal::from(5));

        Self {
            default_delivery_fee,
        }
    }
}

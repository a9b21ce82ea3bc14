use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::errors::CheckoutError;
use crate::domain::cart::model::{CartItem, CartState};
use crate::domain::shared::value_objects::BusinessId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Pix,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Pix => write!(f, "pix"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "pix" => Ok(PaymentMethod::Pix),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub complement: Option<String>,
    pub payment_method: PaymentMethod,
    /// Note the customer pays with; only meaningful for cash.
    pub change_for: Option<BigDecimal>,
}

impl CustomerInfo {
    /// Trims the contact fields and rejects blank required ones.
    pub fn validated(self) -> Result<Self, CheckoutError> {
        let name = required(self.name, "name")?;
        let phone = required(self.phone, "phone")?;
        let address = required(self.address, "address")?;
        let complement = self
            .complement
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let change_for = match self.payment_method {
            PaymentMethod::Cash => self.change_for,
            PaymentMethod::Card | PaymentMethod::Pix => None,
        };

        Ok(Self {
            name,
            phone,
            address,
            complement,
            payment_method: self.payment_method,
            change_for,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, CheckoutError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CheckoutError::MissingCustomerField { field });
    }
    Ok(trimmed.to_string())
}

/// Everything needed to hand the order over to the business.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub business_id: BusinessId,
    pub items: Vec<CartItem>,
    pub subtotal: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub total: BigDecimal,
    pub customer: CustomerInfo,
}

impl OrderSummary {
    pub fn new(
        business_id: BusinessId,
        cart: &CartState,
        delivery_fee: BigDecimal,
        customer: CustomerInfo,
    ) -> Self {
        let subtotal = cart.total().clone();
        let total = &subtotal + &delivery_fee;
        Self {
            business_id,
            items: cart.items().to_vec(),
            subtotal,
            delivery_fee,
            total,
            customer,
        }
    }

    /// Cash orders must be paid with at least the order total.
    pub fn ensure_change_covers_total(&self) -> Result<(), CheckoutError> {
        match &self.customer.change_for {
            Some(paid) if paid < &self.total => Err(CheckoutError::InsufficientChange),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(payment_method: PaymentMethod) -> CustomerInfo {
        CustomerInfo {
            name: "  Maria Silva ".to_string(),
            phone: "11999990000".to_string(),
            address: "Rua das Flores, 123".to_string(),
            complement: Some("   ".to_string()),
            payment_method,
            change_for: Some("100".parse().unwrap()),
        }
    }

    #[test]
    fn should_trim_fields_and_drop_blank_complement() {
        let info = customer(PaymentMethod::Cash).validated().unwrap();

        assert_eq!(info.name, "Maria Silva");
        assert!(info.complement.is_none());
        assert_eq!(info.change_for, Some("100".parse().unwrap()));
    }

    #[test]
    fn should_drop_change_for_non_cash_payment() {
        let info = customer(PaymentMethod::Pix).validated().unwrap();

        assert!(info.change_for.is_none());
    }

    #[test]
    fn should_reject_blank_address() {
        let mut info = customer(PaymentMethod::Card);
        info.address = " ".to_string();

        let result = info.validated();

        assert!(matches!(
            result,
            Err(CheckoutError::MissingCustomerField { field: "address" })
        ));
    }

    #[test]
    fn should_parse_payment_methods() {
        assert_eq!("pix".parse::<PaymentMethod>(), Ok(PaymentMethod::Pix));
        assert!("boleto".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn should_add_delivery_fee_to_subtotal() {
        let summary = OrderSummary::new(
            BusinessId::new("biz1"),
            &CartState::default(),
            "5.00".parse().unwrap(),
            customer(PaymentMethod::Card).validated().unwrap(),
        );

        assert_eq!(summary.subtotal, "0".parse::<BigDecimal>().unwrap());
        assert_eq!(summary.total, "5.00".parse::<BigDecimal>().unwrap());
    }

    fn summary_paid_with(change_for: &str) -> OrderSummary {
        let mut info = customer(PaymentMethod::Cash);
        info.change_for = Some(change_for.parse().unwrap());
        OrderSummary::new(
            BusinessId::new("biz1"),
            &CartState::default(),
            "5.00".parse().unwrap(),
            info.validated().unwrap(),
        )
    }

    #[test]
    fn should_accept_change_equal_to_total() {
        assert!(summary_paid_with("5.00").ensure_change_covers_total().is_ok());
    }

    #[test]
    fn should_reject_change_below_total() {
        let result = summary_paid_with("4.99").ensure_change_covers_total();

        assert!(matches!(result, Err(CheckoutError::InsufficientChange)));
    }

    #[test]
    fn should_not_require_change_for_card() {
        let summary = OrderSummary::new(
            BusinessId::new("biz1"),
            &CartState::default(),
            "5.00".parse().unwrap(),
            customer(PaymentMethod::Card).validated().unwrap(),
        );

        assert!(summary.ensure_change_covers_total().is_ok());
    }
}

use poem_openapi::{Enum, Object};

use business::domain::checkout::model::{CustomerInfo, OrderSummary, PaymentMethod};

use crate::api::cart::dto::CartItemResponse;
use crate::api::money::{format_money, parse_money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum PaymentMethodDto {
    #[oai(rename = "cash")]
    Cash,
    #[oai(rename = "card")]
    Card,
    #[oai(rename = "pix")]
    Pix,
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cash => PaymentMethodDto::Cash,
            PaymentMethod::Card => PaymentMethodDto::Card,
            PaymentMethod::Pix => PaymentMethodDto::Pix,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(dto: PaymentMethodDto) -> Self {
        match dto {
            PaymentMethodDto::Cash => PaymentMethod::Cash,
            PaymentMethodDto::Card => PaymentMethod::Card,
            PaymentMethodDto::Pix => PaymentMethod::Pix,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub complement: Option<String>,
    pub payment_method: PaymentMethodDto,
    /// Amount the customer pays with, for cash payments
    #[oai(skip_serializing_if_is_none)]
    pub change_for: Option<String>,
}

impl CheckoutRequest {
    /// Fails with the i18n code of the rejected field.
    pub fn into_customer(self) -> Result<CustomerInfo, &'static str> {
        let change_for = match self.change_for.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(parse_money(&raw).ok_or("checkout.invalid_change_for")?),
            None => None,
        };

        Ok(CustomerInfo {
            name: self.name,
            phone: self.phone,
            address: self.address,
            complement: self.complement,
            payment_method: self.payment_method.into(),
            change_for,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct CustomerResponse {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[oai(skip_serializing_if_is_none)]
    pub complement: Option<String>,
    pub payment_method: PaymentMethodDto,
    #[oai(skip_serializing_if_is_none)]
    pub change_for: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct OrderSummaryResponse {
    pub business_id: String,
    pub items: Vec<CartItemResponse>,
    pub subtotal: String,
    pub delivery_fee: String,
    pub total: String,
    pub customer: CustomerResponse,
}

impl From<CustomerInfo> for CustomerResponse {
    fn from(customer: CustomerInfo) -> Self {
        Self {
            name: customer.name,
            phone: customer.phone,
            address: customer.address,
            complement: customer.complement,
            payment_method: customer.payment_method.into(),
            change_for: customer.change_for.as_ref().map(format_money),
        }
    }
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(summary: OrderSummary) -> Self {
        Self {
            business_id: summary.business_id.to_string(),
            items: CartItemResponse::from_items(&summary.items),
            subtotal: format_money(&summary.subtotal),
            delivery_fee: format_money(&summary.delivery_fee),
            total: format_money(&summary.total),
            customer: summary.customer.into(),
        }
    }
}

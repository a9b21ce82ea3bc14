use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CustomerInfo, OrderSummary};

pub struct PlaceOrderParams {
    pub session_id: Uuid,
    pub customer: CustomerInfo,
    /// Local wall-clock time of the order; closed businesses still accept it.
    pub at: NaiveDateTime,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderSummary, CheckoutError>;
}

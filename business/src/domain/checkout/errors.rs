#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.missing_customer_field")]
    MissingCustomerField { field: &'static str },
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.business_not_selected")]
    BusinessNotSelected,
    #[error("checkout.business_not_found")]
    BusinessNotFound,
    #[error("checkout.session_not_found")]
    SessionNotFound,
    #[error("checkout.insufficient_change")]
    InsufficientChange,
    #[error("checkout.cart_changed")]
    CartChanged,
    #[error("checkout.cart_rejected")]
    Cart(#[from] crate::domain::cart::errors::CartError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.index_out_of_range")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.empty_selection")]
    EmptySelection,
    #[error("cart.flavors_require_size")]
    FlavorsRequireSize,
    #[error("cart.too_many_flavors")]
    TooManyFlavors { max: u32 },
    #[error("cart.multiple_flavors_not_allowed")]
    MultipleFlavorsNotAllowed,
    #[error("cart.duplicate_flavor")]
    DuplicateFlavor,
    #[error("cart.cannot_remove_base_flavor")]
    CannotRemoveBaseFlavor,
    #[error("cart.unknown_ingredient")]
    UnknownIngredient,
    #[error("cart.session_not_found")]
    SessionNotFound,
    #[error("cart.business_not_found")]
    BusinessNotFound,
    #[error("cart.business_not_selected")]
    BusinessNotSelected,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.size_not_found")]
    SizeNotFound,
    #[error("cart.product_unavailable")]
    ProductUnavailable,
    #[error("cart.concurrent_change")]
    ConcurrentChange,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

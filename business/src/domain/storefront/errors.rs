#[derive(Debug, thiserror::Error)]
pub enum BusinessError {
    #[error("business.invalid_hours")]
    InvalidHours,
}

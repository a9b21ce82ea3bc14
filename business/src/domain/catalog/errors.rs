#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.business_not_found")]
    BusinessNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

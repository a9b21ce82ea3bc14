/// Failures reported by repository adapters. Display strings are i18n codes.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.invalid_data")]
    InvalidData,
    #[error("repository.database_error")]
    DatabaseError,
}

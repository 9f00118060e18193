#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.category_not_found")]
    CategoryNotFound,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("storefront.http_error")]
    Http(#[from] reqwest::Error),
    /// Non-success answer from the API; `message` is the API's error code.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("storefront.storage_error")]
    Storage(#[from] std::io::Error),
    #[error("storefront.serialization_error")]
    Serialization(#[from] serde_json::Error),
    #[error("storefront.not_initialized")]
    NotInitialized,
}

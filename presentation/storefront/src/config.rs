use std::env;
use std::path::PathBuf;

/// Settings of a storefront session.
///
/// Environment variables:
/// - STOREFRONT_API_URL: Base URL of the REST API (default: "http://127.0.0.1:8080")
/// - STOREFRONT_STORAGE_DIR: Directory of the local storage (default: ".storefront")
/// - STOREFRONT_USER_ID: Signed-in user (default: 1)
/// - STOREFRONT_CART_ID: Cart of the signed-in user (default: 1)
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub api_base_url: String,
    pub storage_dir: PathBuf,
    pub user_id: i32,
    pub cart_id: i32,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("STOREFRONT_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            storage_dir: env::var("STOREFRONT_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".storefront")),
            user_id: parse_id(env::var("STOREFRONT_USER_ID").ok()),
            cart_id: parse_id(env::var("STOREFRONT_CART_ID").ok()),
        }
    }
}

fn parse_id(raw: Option<String>) -> i32 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(1)
}

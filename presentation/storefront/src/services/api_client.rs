use reqwest::{Client, Response, StatusCode};

use crate::dtos::ApiErrorDto;
use crate::error::StorefrontError;

/// Shared HTTP client for the Shop Online REST API.
#[derive(Clone)]
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    pub fn product_url(&self, id: i32) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    pub fn shopping_cart_url(&self) -> String {
        format!("{}/api/shopping-cart", self.base_url)
    }

    pub fn cart_item_url(&self, id: i32) -> String {
        format!("{}/api/shopping-cart/{}", self.base_url, id)
    }

    pub fn user_cart_url(&self, user_id: i32) -> String {
        format!("{}/api/users/{}/shopping-cart", self.base_url, user_id)
    }

    /// Turns a non-success response into `StorefrontError::Api`, reading the
    /// error code from the body when there is one.
    pub async fn api_error(response: Response) -> StorefrontError {
        let status = response.status();
        let message = match response.json::<ApiErrorDto>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("storefront.unexpected_status")
                .to_string(),
        };

        StorefrontError::Api {
            status: status.as_u16(),
            message,
        }
    }

    pub fn is_absent(status: StatusCode) -> bool {
        status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://localhost:8080/");

        assert_eq!(client.products_url(), "http://localhost:8080/api/products");
    }

    #[test]
    fn should_build_cart_urls() {
        let client = ApiClient::new("http://localhost:8080");

        assert_eq!(
            client.user_cart_url(1),
            "http://localhost:8080/api/users/1/shopping-cart"
        );
        assert_eq!(
            client.cart_item_url(10),
            "http://localhost:8080/api/shopping-cart/10"
        );
        assert_eq!(client.product_url(5), "http://localhost:8080/api/products/5");
    }

    #[test]
    fn should_treat_no_content_and_not_found_as_absent() {
        assert!(ApiClient::is_absent(StatusCode::NO_CONTENT));
        assert!(ApiClient::is_absent(StatusCode::NOT_FOUND));
        assert!(!ApiClient::is_absent(StatusCode::OK));
    }
}

use async_trait::async_trait;

use crate::dtos::ProductDto;
use crate::error::StorefrontError;
use crate::services::api_client::ApiClient;
use crate::services::contracts::ProductService;

pub struct ProductServiceHttp {
    client: ApiClient,
}

impl ProductServiceHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductService for ProductServiceHttp {
    async fn get_items(&self) -> Result<Vec<ProductDto>, StorefrontError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await?;

        if ApiClient::is_absent(response.status()) {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(ApiClient::api_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_item(&self, id: i32) -> Result<Option<ProductDto>, StorefrontError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(id))
            .send()
            .await?;

        if ApiClient::is_absent(response.status()) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiClient::api_error(response).await);
        }

        Ok(Some(response.json().await?))
    }
}

use async_trait::async_trait;

use crate::dtos::{CartItemDto, CartItemQtyUpdateDto, CartItemToAddDto};
use crate::error::StorefrontError;
use crate::services::api_client::ApiClient;
use crate::services::contracts::ShoppingCartService;

pub struct ShoppingCartServiceHttp {
    client: ApiClient,
}

impl ShoppingCartServiceHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn read_item(
        response: reqwest::Response,
    ) -> Result<Option<CartItemDto>, StorefrontError> {
        if ApiClient::is_absent(response.status()) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiClient::api_error(response).await);
        }

        Ok(Some(response.json().await?))
    }
}

#[async_trait]
impl ShoppingCartService for ShoppingCartServiceHttp {
    async fn get_items(&self, user_id: i32) -> Result<Vec<CartItemDto>, StorefrontError> {
        let response = self
            .client
            .client
            .get(self.client.user_cart_url(user_id))
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

    async fn add_item(
        &self,
        item: &CartItemToAddDto,
    ) -> Result<Option<CartItemDto>, StorefrontError> {
        let response = self
            .client
            .client
            .post(self.client.shopping_cart_url())
            .json(item)
            .send()
            .await?;

        // Only 204 means "not added"; 404 is an error here
        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiClient::api_error(response).await);
        }

        Ok(Some(response.json().await?))
    }

    async fn delete_item(&self, id: i32) -> Result<Option<CartItemDto>, StorefrontError> {
        let response = self
            .client
            .client
            .delete(self.client.cart_item_url(id))
            .send()
            .await?;

        Self::read_item(response).await
    }

    async fn update_qty(
        &self,
        id: i32,
        qty: i32,
    ) -> Result<Option<CartItemDto>, StorefrontError> {
        let response = self
            .client
            .client
            .patch(self.client.cart_item_url(id))
            .json(&CartItemQtyUpdateDto { qty })
            .send()
            .await?;

        Self::read_item(response).await
    }
}

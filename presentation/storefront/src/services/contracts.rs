use async_trait::async_trait;
use serde_json::Value;

use crate::dtos::{CartItemDto, CartItemToAddDto, ProductDto};
use crate::error::StorefrontError;

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_items(&self) -> Result<Vec<ProductDto>, StorefrontError>;
    async fn get_item(&self, id: i32) -> Result<Option<ProductDto>, StorefrontError>;
}

#[async_trait]
pub trait ShoppingCartService: Send + Sync {
    async fn get_items(&self, user_id: i32) -> Result<Vec<CartItemDto>, StorefrontError>;
    /// `Ok(None)` when the API added nothing (product already in the cart).
    async fn add_item(
        &self,
        item: &CartItemToAddDto,
    ) -> Result<Option<CartItemDto>, StorefrontError>;
    async fn delete_item(&self, id: i32) -> Result<Option<CartItemDto>, StorefrontError>;
    async fn update_qty(&self, id: i32, qty: i32)
    -> Result<Option<CartItemDto>, StorefrontError>;
}

/// Client-side key/value store holding JSON documents.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StorefrontError>;
    async fn set_item(&self, key: &str, value: Value) -> Result<(), StorefrontError>;
    async fn remove_item(&self, key: &str) -> Result<(), StorefrontError>;
}

#[async_trait]
pub trait ManageProductsLocalStorage: Send + Sync {
    async fn get_collection(&self) -> Result<Vec<ProductDto>, StorefrontError>;
    async fn remove_collection(&self) -> Result<(), StorefrontError>;
}

#[async_trait]
pub trait ManageCartItemsLocalStorage: Send + Sync {
    async fn get_collection(&self) -> Result<Vec<CartItemDto>, StorefrontError>;
    async fn save_collection(&self, items: &[CartItemDto]) -> Result<(), StorefrontError>;
    async fn remove_collection(&self) -> Result<(), StorefrontError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::dtos::CartItemDto;
use crate::error::StorefrontError;
use crate::services::contracts::{LocalStorage, ManageCartItemsLocalStorage, ShoppingCartService};

pub const CART_ITEMS_KEY: &str = "CartItemCollection";

/// The signed-in user's cart items cached in local storage.
pub struct ManageCartItemsLocalStorageImpl {
    pub storage: Arc<dyn LocalStorage>,
    pub shopping_cart_service: Arc<dyn ShoppingCartService>,
    pub user_id: i32,
}

#[async_trait]
impl ManageCartItemsLocalStorage for ManageCartItemsLocalStorageImpl {
    async fn get_collection(&self) -> Result<Vec<CartItemDto>, StorefrontError> {
        if let Some(cached) = self.storage.get_item(CART_ITEMS_KEY).await? {
            return Ok(serde_json::from_value(cached)?);
        }

        tracing::debug!(user_id = self.user_id, "Cart item collection not cached, fetching from API");
        let items = self.shopping_cart_service.get_items(self.user_id).await?;
        self.save_collection(&items).await?;
        Ok(items)
    }

    async fn save_collection(&self, items: &[CartItemDto]) -> Result<(), StorefrontError> {
        self.storage
            .set_item(CART_ITEMS_KEY, serde_json::to_value(items)?)
            .await
    }

    async fn remove_collection(&self) -> Result<(), StorefrontError> {
        self.storage.remove_item(CART_ITEMS_KEY).await
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::dtos::ProductDto;
use crate::error::StorefrontError;
use crate::services::contracts::{LocalStorage, ManageProductsLocalStorage, ProductService};

pub const PRODUCTS_KEY: &str = "ProductCollection";

/// Products cached in local storage, fetched from the API on first use.
pub struct ManageProductsLocalStorageImpl {
    pub storage: Arc<dyn LocalStorage>,
    pub product_service: Arc<dyn ProductService>,
}

#[async_trait]
impl ManageProductsLocalStorage for ManageProductsLocalStorageImpl {
    async fn get_collection(&self) -> Result<Vec<ProductDto>, StorefrontError> {
        if let Some(cached) = self.storage.get_item(PRODUCTS_KEY).await? {
            return Ok(serde_json::from_value(cached)?);
        }

        tracing::debug!("Product collection not cached, fetching from API");
        let products = self.product_service.get_items().await?;
        self.storage
            .set_item(PRODUCTS_KEY, serde_json::to_value(&products)?)
            .await?;
        Ok(products)
    }

    async fn remove_collection(&self) -> Result<(), StorefrontError> {
        self.storage.remove_item(PRODUCTS_KEY).await
    }
}

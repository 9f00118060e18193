use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductCategory};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_items(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_item(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn get_categories(&self) -> Result<Vec<ProductCategory>, RepositoryError>;
    async fn get_category(&self, id: i32) -> Result<Option<ProductCategory>, RepositoryError>;
    async fn get_items_by_category(&self, category_id: i32)
    -> Result<Vec<Product>, RepositoryError>;
    /// Products among `ids`; unknown ids are absent from the result.
    async fn get_items_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, RepositoryError>;
}

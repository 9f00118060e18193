use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{CartItem, NewCartItem};

/// CRUD over cart items. Missing records are reported as `Ok(None)`.
#[async_trait]
pub trait ShoppingCartRepository: Send + Sync {
    /// Returns `None` without writing when the cart already holds the product
    /// or when the product does not exist. An unknown cart is a write failure
    /// (`RepositoryError::Persistence`).
    async fn add_item(&self, item: &NewCartItem) -> Result<Option<CartItem>, RepositoryError>;
    /// Returns the deleted item as it was before removal.
    async fn delete_item(&self, id: i32) -> Result<Option<CartItem>, RepositoryError>;
    async fn get_item(&self, id: i32) -> Result<Option<CartItem>, RepositoryError>;
    async fn get_items(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError>;
    /// Overwrites the quantity only; no validation happens at this level.
    async fn update_qty(&self, id: i32, qty: i32) -> Result<Option<CartItem>, RepositoryError>;
}

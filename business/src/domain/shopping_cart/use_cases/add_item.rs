use async_trait::async_trait;

use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;

pub struct AddCartItemParams {
    pub cart_id: i32,
    pub product_id: i32,
    pub qty: i32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    /// `Ok(None)` when nothing was added.
    async fn execute(
        &self,
        params: AddCartItemParams,
    ) -> Result<Option<CartItemDetails>, ShoppingCartError>;
}

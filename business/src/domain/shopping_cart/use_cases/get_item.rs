use async_trait::async_trait;

use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;

pub struct GetCartItemParams {
    pub id: i32,
}

#[async_trait]
pub trait GetCartItemUseCase: Send + Sync {
    async fn execute(&self, params: GetCartItemParams)
    -> Result<CartItemDetails, ShoppingCartError>;
}

use async_trait::async_trait;

use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;

pub struct UpdateCartItemQtyParams {
    pub id: i32,
    pub qty: i32,
}

#[async_trait]
pub trait UpdateCartItemQtyUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCartItemQtyParams,
    ) -> Result<CartItemDetails, ShoppingCartError>;
}

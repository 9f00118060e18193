use async_trait::async_trait;

use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;

pub struct DeleteCartItemParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteCartItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DeleteCartItemParams,
    ) -> Result<CartItemDetails, ShoppingCartError>;
}

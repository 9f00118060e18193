use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;

pub struct GetCartItemsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCartItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCartItemsParams,
    ) -> Result<Vec<CartItemDetails>, ShoppingCartError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::get_item::{GetCartItemParams, GetCartItemUseCase};

pub struct GetCartItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemUseCase for GetCartItemUseCaseImpl {
    async fn execute(
        &self,
        params: GetCartItemParams,
    ) -> Result<CartItemDetails, ShoppingCartError> {
        self.logger
            .info(&format!("Fetching cart item: {}", params.id));

        let item = self
            .repository
            .get_item(params.id)
            .await?
            .ok_or(ShoppingCartError::NotFound)?;

        let product = self
            .product_repository
            .get_item(item.product_id)
            .await?
            .ok_or(ShoppingCartError::ProductNotFound)?;

        Ok(CartItemDetails::new(item, product))
    }
}

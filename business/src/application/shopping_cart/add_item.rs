use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::{CartItemDetails, NewCartItem};
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddCartItemParams,
    ) -> Result<Option<CartItemDetails>, ShoppingCartError> {
        self.logger.info(&format!(
            "Adding product {} (qty {}) to cart {}",
            params.product_id, params.qty, params.cart_id
        ));

        let new_item = NewCartItem::new(params.cart_id, params.product_id, params.qty)?;

        let Some(item) = self.repository.add_item(&new_item).await? else {
            self.logger.info(&format!(
                "Product {} not added to cart {}: already present or unknown product",
                new_item.product_id, new_item.cart_id
            ));
            return Ok(None);
        };

        let product = self
            .product_repository
            .get_item(item.product_id)
            .await?
            .ok_or(ShoppingCartError::ProductNotFound)?;

        self.logger.info(&format!("Cart item created: {}", item.id));
        Ok(Some(CartItemDetails::new(item, product)))
    }
}

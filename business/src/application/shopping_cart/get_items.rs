use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};

pub struct GetCartItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartItemsUseCase for GetCartItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetCartItemsParams,
    ) -> Result<Vec<CartItemDetails>, ShoppingCartError> {
        self.logger
            .info(&format!("Fetching cart items for user: {}", params.user_id));

        let items = self.repository.get_items(params.user_id).await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut product_ids: Vec<i32> = items.iter().map(|i| i.product_id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        let products: HashMap<i32, _> = self
            .product_repository
            .get_items_by_ids(&product_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        // Inner join: items whose product left the catalog are dropped
        let mut details = Vec::with_capacity(items.len());
        for item in items {
            let product = match products.get(&item.product_id).cloned() {
                Some(product) => product,
                None => {
                    self.logger.warn(&format!(
                        "Cart item {} references unknown product {}",
                        item.id, item.product_id
                    ));
                    continue;
                }
            };
            details.push(CartItemDetails::new(item, product));
        }

        Ok(details)
    }
}

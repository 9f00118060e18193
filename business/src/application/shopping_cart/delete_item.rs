use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::CartItemDetails;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::delete_item::{
    DeleteCartItemParams, DeleteCartItemUseCase,
};

pub struct DeleteCartItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(
        &self,
        params: DeleteCartItemParams,
    ) -> Result<CartItemDetails, ShoppingCartError> {
        self.logger
            .info(&format!("Deleting cart item: {}", params.id));

        let item = self
            .repository
            .delete_item(params.id)
            .await?
            .ok_or(ShoppingCartError::NotFound)?;

        self.logger
            .info(&format!("Cart item deleted: {}", item.id));

        let product = self
            .product_repository
            .get_item(item.product_id)
            .await?
            .ok_or(ShoppingCartError::ProductNotFound)?;

        Ok(CartItemDetails::new(item, product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductCategory};
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_cart::model::{CartItem, NewCartItem};
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl ShoppingCartRepository for CartRepo {
            async fn add_item(&self, item: &NewCartItem) -> Result<Option<CartItem>, RepositoryError>;
            async fn delete_item(&self, id: i32) -> Result<Option<CartItem>, RepositoryError>;
            async fn get_item(&self, id: i32) -> Result<Option<CartItem>, RepositoryError>;
            async fn get_items(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError>;
            async fn update_qty(&self, id: i32, qty: i32) -> Result<Option<CartItem>, RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_items(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_item(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
            async fn get_categories(&self) -> Result<Vec<ProductCategory>, RepositoryError>;
            async fn get_category(&self, id: i32) -> Result<Option<ProductCategory>, RepositoryError>;
            async fn get_items_by_category(&self, category_id: i32) -> Result<Vec<Product>, RepositoryError>;
            async fn get_items_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: i32) -> Product {
        Product {
            id,
            name: "Sony Headphones".to_string(),
            description: "Wireless over-ear headphones".to_string(),
            image_url: "/Images/Electronic/Electronic1.png".to_string(),
            price: BigDecimal::from(40),
            qty: 20,
            category_id: 3,
            category_name: "Electronics".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_prior_state_of_deleted_item() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_delete_item()
            .withf(|id| *id == 10)
            .times(1)
            .returning(|id| {
                Ok(Some(CartItem {
                    id,
                    cart_id: 1,
                    product_id: 5,
                    qty: 2,
                }))
            });
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_item()
            .returning(|id| Ok(Some(product(id))));

        let use_case = DeleteCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteCartItemParams { id: 10 }).await;

        let details = result.unwrap();
        assert_eq!(
            details.item,
            CartItem {
                id: 10,
                cart_id: 1,
                product_id: 5,
                qty: 2,
            }
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_delete_item().returning(|_| Ok(None));
        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_item().never();

        let use_case = DeleteCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteCartItemParams { id: 404 }).await;

        assert!(matches!(result.unwrap_err(), ShoppingCartError::NotFound));
    }
}

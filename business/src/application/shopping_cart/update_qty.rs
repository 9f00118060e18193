use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::{CartItemDetails, validate_qty};
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::update_qty::{
    UpdateCartItemQtyParams, UpdateCartItemQtyUseCase,
};

pub struct UpdateCartItemQtyUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQtyUseCase for UpdateCartItemQtyUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCartItemQtyParams,
    ) -> Result<CartItemDetails, ShoppingCartError> {
        self.logger.info(&format!(
            "Updating qty of cart item {} to {}",
            params.id, params.qty
        ));

        validate_qty(params.qty)?;

        let item = self
            .repository
            .update_qty(params.id, params.qty)
            .await?
            .ok_or(ShoppingCartError::NotFound)?;

        let product = self
            .product_repository
            .get_item(item.product_id)
            .await?
            .ok_or(ShoppingCartError::ProductNotFound)?;

        self.logger
            .info(&format!("Cart item updated: {}", item.id));
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
    async fn should_update_only_qty() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_update_qty()
            .withf(|id, qty| *id == 10 && *qty == 7)
            .returning(|id, qty| {
                Ok(Some(CartItem {
                    id,
                    cart_id: 1,
                    product_id: 5,
                    qty,
                }))
            });
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_item()
            .returning(|id| Ok(Some(product(id))));

        let use_case = UpdateCartItemQtyUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let details = use_case
            .execute(UpdateCartItemQtyParams { id: 10, qty: 7 })
            .await
            .unwrap();

        assert_eq!(
            details.item,
            CartItem {
                id: 10,
                cart_id: 1,
                product_id: 5,
                qty: 7,
            }
        );
        assert_eq!(details.total_price(), BigDecimal::from(280));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_does_not_exist() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_update_qty().returning(|_, _| Ok(None));

        let use_case = UpdateCartItemQtyUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemQtyParams { id: 404, qty: 3 })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingCartError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_negative_qty_before_touching_store() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_update_qty().never();

        let use_case = UpdateCartItemQtyUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemQtyParams { id: 10, qty: -1 })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingCartError::InvalidQuantity
        ));
    }
}

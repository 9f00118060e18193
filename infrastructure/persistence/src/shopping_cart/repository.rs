use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_cart::model::{CartItem, NewCartItem};
use business::domain::shopping_cart::repository::ShoppingCartRepository;

use super::entity::CartItemEntity;
use crate::errors::{read_error, write_error};

pub struct ShoppingCartRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingCartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn cart_item_exists(&self, cart_id: i32, product_id: i32) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM cart_items WHERE cart_id = $1 AND product_id = $2)",
        )
        .bind(cart_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(read_error)
    }
}

#[async_trait]
impl ShoppingCartRepository for ShoppingCartRepositoryPostgres {
    async fn add_item(&self, item: &NewCartItem) -> Result<Option<CartItem>, RepositoryError> {
        if self.cart_item_exists(item.cart_id, item.product_id).await? {
            tracing::debug!(
                cart_id = item.cart_id,
                product_id = item.product_id,
                "Cart already holds product"
            );
            return Ok(None);
        }

        let product_id = sqlx::query_scalar::<_, i32>("SELECT id FROM products WHERE id = $1")
            .bind(item.product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        let Some(product_id) = product_id else {
            tracing::debug!(product_id = item.product_id, "Unknown product");
            return Ok(None);
        };

        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"INSERT INTO cart_items (cart_id, product_id, qty)
            VALUES ($1, $2, $3)
            RETURNING id, cart_id, product_id, qty"#,
        )
        .bind(item.cart_id)
        .bind(product_id)
        .bind(item.qty)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(Some(entity.into_domain()))
    }

    async fn delete_item(&self, id: i32) -> Result<Option<CartItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "DELETE FROM cart_items WHERE id = $1 RETURNING id, cart_id, product_id, qty",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_item(&self, id: i32) -> Result<Option<CartItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            r#"SELECT ci.id, ci.cart_id, ci.product_id, ci.qty
            FROM cart_items ci
            INNER JOIN carts c ON ci.cart_id = c.id
            WHERE ci.id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_items(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            r#"SELECT ci.id, ci.cart_id, ci.product_id, ci.qty
            FROM carts c
            INNER JOIN cart_items ci ON c.id = ci.cart_id
            WHERE c.user_id = $1"#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update_qty(&self, id: i32, qty: i32) -> Result<Option<CartItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "UPDATE cart_items SET qty = $2 WHERE id = $1 RETURNING id, cart_id, product_id, qty",
        )
        .bind(id)
        .bind(qty)
        .fetch_optional(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }
}

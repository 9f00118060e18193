use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductCategory};
use business::domain::product::repository::ProductRepository;

use super::entity::{ProductCategoryEntity, ProductEntity};
use crate::errors::read_error;

const SELECT_PRODUCTS: &str = r#"SELECT p.id, p.name, p.description, p.image_url, p.price, p.qty,
        p.category_id, c.name AS category_name
    FROM products p
    INNER JOIN product_categories c ON p.category_id = c.id"#;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_items(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} ORDER BY p.id"))
                .fetch_all(&self.pool)
                .await
                .map_err(read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_item(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_categories(&self) -> Result<Vec<ProductCategory>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductCategoryEntity>(
            "SELECT id, name, icon_css FROM product_categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<ProductCategory>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductCategoryEntity>(
            "SELECT id, name, icon_css FROM product_categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_items_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_PRODUCTS} WHERE p.category_id = $1 ORDER BY p.id"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_items_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_PRODUCTS} WHERE p.id = ANY($1) ORDER BY p.id"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

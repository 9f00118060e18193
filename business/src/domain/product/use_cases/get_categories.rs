use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductCategory;

#[async_trait]
pub trait GetProductCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProductCategory>, ProductError>;
}

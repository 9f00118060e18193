use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductCategory;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_categories::GetProductCategoriesUseCase;

pub struct GetProductCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductCategoriesUseCase for GetProductCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductCategory>, ProductError> {
        self.logger.info("Fetching product categories");
        Ok(self.repository.get_categories().await?)
    }
}

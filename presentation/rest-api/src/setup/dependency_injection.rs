use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::shopping_cart::repository::ShoppingCartRepositoryPostgres;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_categories::GetProductCategoriesUseCaseImpl;
use business::application::shopping_cart::add_item::AddCartItemUseCaseImpl;
use business::application::shopping_cart::delete_item::DeleteCartItemUseCaseImpl;
use business::application::shopping_cart::get_item::GetCartItemUseCaseImpl;
use business::application::shopping_cart::get_items::GetCartItemsUseCaseImpl;
use business::application::shopping_cart::update_qty::UpdateCartItemQtyUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub shopping_cart_api: crate::api::shopping_cart::routes::ShoppingCartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let product_logger = Arc::new(TracingLogger::new("product"));
        let cart_logger = Arc::new(TracingLogger::new("shopping_cart"));
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let shopping_cart_repository = Arc::new(ShoppingCartRepositoryPostgres::new(pool));

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetProductCategoriesUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_products_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger,
        });

        // Shopping cart use cases
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: cart_logger.clone(),
        });
        let get_item_use_case = Arc::new(GetCartItemUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: cart_logger.clone(),
        });
        let get_items_use_case = Arc::new(GetCartItemsUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: cart_logger.clone(),
        });
        let update_qty_use_case = Arc::new(UpdateCartItemQtyUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: cart_logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteCartItemUseCaseImpl {
            repository: shopping_cart_repository,
            product_repository,
            logger: cart_logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
            get_categories_use_case,
            get_products_by_category_use_case,
        );

        let shopping_cart_api = crate::api::shopping_cart::routes::ShoppingCartApi::new(
            add_item_use_case,
            get_item_use_case,
            get_items_use_case,
            update_qty_use_case,
            delete_item_use_case,
        );

        Self {
            health_api,
            product_api,
            shopping_cart_api,
        }
    }
}

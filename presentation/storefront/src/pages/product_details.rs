use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::dtos::{CartItemDto, CartItemToAddDto, ProductDto};
use crate::error::StorefrontError;
use crate::navigation::{HistoryNavigator, Navigator};
use crate::services::api_client::ApiClient;
use crate::services::contracts::{
    ManageCartItemsLocalStorage, ManageProductsLocalStorage, ShoppingCartService,
};
use crate::services::local_storage::FileLocalStorage;
use crate::services::manage_cart_items_local_storage::ManageCartItemsLocalStorageImpl;
use crate::services::manage_products_local_storage::ManageProductsLocalStorageImpl;
use crate::services::product_service::ProductServiceHttp;
use crate::services::shopping_cart_service::ShoppingCartServiceHttp;

pub const SHOPPING_CART_PAGE: &str = "/ShoppingCart";

pub struct ProductDetailsServices {
    pub shopping_cart_service: Arc<dyn ShoppingCartService>,
    pub products_storage: Arc<dyn ManageProductsLocalStorage>,
    pub cart_items_storage: Arc<dyn ManageCartItemsLocalStorage>,
    pub navigator: Arc<dyn Navigator>,
}

impl ProductDetailsServices {
    /// Wires the HTTP services and file storage described by `config`.
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let client = ApiClient::new(config.api_base_url.clone());
        let storage = Arc::new(FileLocalStorage::new(config.storage_dir.clone()));
        let shopping_cart_service = Arc::new(ShoppingCartServiceHttp::new(client.clone()));

        Self {
            shopping_cart_service: shopping_cart_service.clone(),
            products_storage: Arc::new(ManageProductsLocalStorageImpl {
                storage: storage.clone(),
                product_service: Arc::new(ProductServiceHttp::new(client)),
            }),
            cart_items_storage: Arc::new(ManageCartItemsLocalStorageImpl {
                storage,
                shopping_cart_service,
                user_id: config.user_id,
            }),
            navigator: Arc::new(HistoryNavigator::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Loaded,
    Errored(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddToCartOutcome {
    Added(CartItemDto),
    /// The API added nothing, typically because the product is already in the cart.
    NotAdded,
}

/// State behind the Product Details page.
pub struct ProductDetailsViewModel {
    id: i32,
    services: ProductDetailsServices,
    state: InitState,
    product: Option<ProductDto>,
    cart_items: Vec<CartItemDto>,
}

impl ProductDetailsViewModel {
    pub fn new(id: i32, services: ProductDetailsServices) -> Self {
        Self {
            id,
            services,
            state: InitState::Uninitialized,
            product: None,
            cart_items: Vec::new(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn state(&self) -> &InitState {
        &self.state
    }

    /// `None` until loaded, and when the product is not in the catalog.
    pub fn product(&self) -> Option<&ProductDto> {
        self.product.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            InitState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn cart_items(&self) -> &[CartItemDto] {
        &self.cart_items
    }

    /// Loads the cached cart and catalog. Runs once; later calls are no-ops.
    pub async fn initialize(&mut self) {
        if self.state != InitState::Uninitialized {
            return;
        }

        match self.load().await {
            Ok((cart_items, product)) => {
                if product.is_none() {
                    tracing::warn!(product_id = self.id, "Product not found in collection");
                }
                self.cart_items = cart_items;
                self.product = product;
                self.state = InitState::Loaded;
            }
            Err(e) => {
                tracing::error!(product_id = self.id, error = %e, "Failed to load product details");
                self.state = InitState::Errored(e.to_string());
            }
        }
    }

    async fn load(&self) -> Result<(Vec<CartItemDto>, Option<ProductDto>), StorefrontError> {
        let cart_items = self.services.cart_items_storage.get_collection().await?;
        let product = self
            .services
            .products_storage
            .get_collection()
            .await?
            .into_iter()
            .find(|p| p.id == self.id);

        Ok((cart_items, product))
    }

    /// Adds the product to the cart and moves to the cart page.
    ///
    /// On error nothing is navigated and the cached cart is left as is.
    pub async fn add_to_cart(
        &mut self,
        item: CartItemToAddDto,
    ) -> Result<AddToCartOutcome, StorefrontError> {
        if self.state != InitState::Loaded {
            return Err(StorefrontError::NotInitialized);
        }

        match self.try_add(&item).await {
            Ok(outcome) => {
                self.services.navigator.navigate_to(SHOPPING_CART_PAGE, true);
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(
                    cart_id = item.cart_id,
                    product_id = item.product_id,
                    error = %e,
                    "Failed to add product to cart"
                );
                Err(e)
            }
        }
    }

    async fn try_add(&mut self, item: &CartItemToAddDto) -> Result<AddToCartOutcome, StorefrontError> {
        let Some(added) = self.services.shopping_cart_service.add_item(item).await? else {
            return Ok(AddToCartOutcome::NotAdded);
        };

        let mut cart_items = self.cart_items.clone();
        cart_items.push(added.clone());
        self.services
            .cart_items_storage
            .save_collection(&cart_items)
            .await?;
        self.cart_items = cart_items;

        Ok(AddToCartOutcome::Added(added))
    }
}

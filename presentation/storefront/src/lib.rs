pub mod config;
pub mod dtos;
pub mod error;
pub mod navigation;
pub mod pages {
    pub mod product_details;
}
pub mod services {
    pub mod api_client;
    pub mod contracts;
    pub mod local_storage;
    pub mod manage_cart_items_local_storage;
    pub mod manage_products_local_storage;
    pub mod product_service;
    pub mod shopping_cart_service;
}

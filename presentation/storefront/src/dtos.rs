//! Wire shapes of the Shop Online REST API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub qty: i32,
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemDto {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub qty: i32,
    pub product_name: String,
    pub product_description: String,
    pub product_image_url: String,
    pub price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemToAddDto {
    pub cart_id: i32,
    pub product_id: i32,
    pub qty: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemQtyUpdateDto {
    pub qty: i32,
}

/// Error body returned by the API on 4xx/5xx.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDto {
    pub name: String,
    pub message: String,
}

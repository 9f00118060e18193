use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::product::model::{Product, ProductCategory};

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Relative URL of the product image
    pub image_url: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub qty: i32,
    /// Category identifier
    pub category_id: i32,
    /// Category name
    pub category_name: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            price: product.price.to_f64().unwrap_or_default(),
            qty: product.qty,
            category_id: product.category_id,
            category_name: product.category_name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCategoryResponse {
    pub id: i32,
    pub name: String,
    /// CSS classes of the category icon
    pub icon_css: String,
}

impl From<ProductCategory> for ProductCategoryResponse {
    fn from(category: ProductCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            icon_css: category.icon_css,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn should_convert_decimal_price_to_float() {
        let product = Product {
            id: 2,
            name: "Curology - Skin Care Kit".to_string(),
            description: "Skin care products".to_string(),
            image_url: "/Images/Beauty/Beauty2.png".to_string(),
            price: BigDecimal::from_str("12.5").unwrap(),
            qty: 45,
            category_id: 1,
            category_name: "Beauty".to_string(),
        };

        let response = ProductResponse::from(product);

        assert_eq!(response.price, 12.5);
        assert_eq!(response.category_name, "Beauty");
    }
}

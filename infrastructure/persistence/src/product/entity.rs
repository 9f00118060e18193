use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::{Product, ProductCategory};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: BigDecimal,
    pub qty: i32,
    pub category_id: i32,
    pub category_name: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            qty: self.qty,
            category_id: self.category_id,
            category_name: self.category_name,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductCategoryEntity {
    pub id: i32,
    pub name: String,
    pub icon_css: String,
}

impl ProductCategoryEntity {
    pub fn into_domain(self) -> ProductCategory {
        ProductCategory {
            id: self.id,
            name: self.name,
            icon_css: self.icon_css,
        }
    }
}

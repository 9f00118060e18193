use bigdecimal::BigDecimal;

/// A catalog entry. Read-only from the shopping cart's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: BigDecimal,
    /// Units in stock.
    pub qty: i32,
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCategory {
    pub id: i32,
    pub name: String,
    pub icon_css: String,
}

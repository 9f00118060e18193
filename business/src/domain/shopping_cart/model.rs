use bigdecimal::BigDecimal;

use super::errors::ShoppingCartError;
use crate::domain::product::model::Product;

/// Association of a product with a quantity within a cart.
///
/// At most one item exists per `(cart_id, product_id)`; the repository checks
/// for an existing item before inserting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub qty: i32,
}

/// Request to place a product in a cart. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub cart_id: i32,
    pub product_id: i32,
    pub qty: i32,
}

impl NewCartItem {
    pub fn new(cart_id: i32, product_id: i32, qty: i32) -> Result<Self, ShoppingCartError> {
        validate_qty(qty)?;
        Ok(Self {
            cart_id,
            product_id,
            qty,
        })
    }
}

pub fn validate_qty(qty: i32) -> Result<(), ShoppingCartError> {
    if qty < 1 {
        return Err(ShoppingCartError::InvalidQuantity);
    }
    Ok(())
}

/// A cart item enriched with the product it references.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemDetails {
    pub item: CartItem,
    pub product: Product,
}

impl CartItemDetails {
    pub fn new(item: CartItem, product: Product) -> Self {
        Self { item, product }
    }

    pub fn total_price(&self) -> BigDecimal {
        &self.product.price * BigDecimal::from(self.item.qty)
    }
}

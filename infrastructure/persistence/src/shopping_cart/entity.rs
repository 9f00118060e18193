use sqlx::FromRow;

use business::domain::shopping_cart::model::CartItem;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub qty: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem {
            id: self.id,
            cart_id: self.cart_id,
            product_id: self.product_id,
            qty: self.qty,
        }
    }
}

use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::shopping_cart::model::CartItemDetails;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Cart receiving the product
    pub cart_id: i32,
    /// Product to add
    pub product_id: i32,
    /// Quantity (at least 1)
    pub qty: i32,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemQtyRequest {
    /// New quantity (at least 1)
    pub qty: i32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Cart item identifier
    pub id: i32,
    /// Owning cart
    pub cart_id: i32,
    /// Referenced product
    pub product_id: i32,
    /// Quantity in the cart
    pub qty: i32,
    pub product_name: String,
    pub product_description: String,
    pub product_image_url: String,
    /// Unit price
    pub price: f64,
    /// Unit price times quantity
    pub total_price: f64,
}

impl From<CartItemDetails> for CartItemResponse {
    fn from(details: CartItemDetails) -> Self {
        let total_price = details.total_price().to_f64().unwrap_or_default();
        let CartItemDetails { item, product } = details;

        Self {
            id: item.id,
            cart_id: item.cart_id,
            product_id: item.product_id,
            qty: item.qty,
            product_name: product.name,
            product_description: product.description,
            product_image_url: product.image_url,
            price: product.price.to_f64().unwrap_or_default(),
            total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::product::model::Product;
    use business::domain::shopping_cart::model::CartItem;

    #[test]
    fn should_flatten_item_and_product() {
        let details = CartItemDetails::new(
            CartItem {
                id: 10,
                cart_id: 1,
                product_id: 5,
                qty: 7,
            },
            Product {
                id: 5,
                name: "Sony Headphones".to_string(),
                description: "Wireless over-ear headphones".to_string(),
                image_url: "/Images/Electronic/Electronic1.png".to_string(),
                price: BigDecimal::from(40),
                qty: 60,
                category_id: 3,
                category_name: "Electronics".to_string(),
            },
        );

        let response = CartItemResponse::from(details);

        assert_eq!(response.id, 10);
        assert_eq!(response.cart_id, 1);
        assert_eq!(response.product_id, 5);
        assert_eq!(response.qty, 7);
        assert_eq!(response.product_name, "Sony Headphones");
        assert_eq!(response.price, 40.0);
        assert_eq!(response.total_price, 280.0);
    }
}

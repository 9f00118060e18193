pub mod error;
pub mod health;
pub mod product;
pub mod shopping_cart;
pub mod tags;

use crate::domain::shared::value_objects::UserId;

use super::errors::CartError;

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingCart {
    pub id: i64,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
}

impl ShoppingCart {
    pub fn from_repository(id: i64, user_id: UserId, items: Vec<CartItem>) -> Self {
        Self { id, user_id, items }
    }
}

/// A single line of a cart: one book and how many copies of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub quantity: i32,
}

impl CartItem {
    pub fn validate_quantity(quantity: i32) -> Result<i32, CartError> {
        if quantity <= 0 {
            return Err(CartError::QuantityNotPositive);
        }
        Ok(quantity)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        cart_id: i64,
        book_id: i64,
        book_title: String,
        quantity: i32,
    ) -> Self {
        Self {
            id,
            cart_id,
            book_id,
            book_title,
            quantity,
        }
    }
}

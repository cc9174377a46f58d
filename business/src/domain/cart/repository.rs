use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{CartItem, ShoppingCart};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Loads the user's cart with all of its lines.
    async fn find_by_user(&self, user_id: &UserId)
    -> Result<Option<ShoppingCart>, RepositoryError>;
    async fn create_for_user(&self, user_id: &UserId) -> Result<ShoppingCart, RepositoryError>;
    /// Inserts a line for the book, or grows the existing line by `quantity`
    /// (capped at `i32::MAX`), in a single atomic write.
    async fn add_or_increment_item(
        &self,
        cart_id: i64,
        book_id: i64,
        quantity: i32,
    ) -> Result<(), RepositoryError>;
    /// Returns `None` when no item `item_id` exists in the cart of `user_id`.
    async fn update_item_quantity(
        &self,
        item_id: i64,
        user_id: &UserId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError>;
    /// Returns `false` when no item `item_id` exists in the cart of `user_id`.
    async fn delete_item(&self, item_id: i64, user_id: &UserId) -> Result<bool, RepositoryError>;
}

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct AddCartItemParams {
    pub user_id: UserId,
    pub book_id: i64,
    pub quantity: i32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<ShoppingCart, CartError>;
}

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCartItemParams {
    pub user_id: UserId,
    pub cart_item_id: i64,
    pub quantity: i32,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartError>;
}

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCartItemParams {
    pub user_id: UserId,
    pub cart_item_id: i64,
}

#[async_trait]
pub trait DeleteCartItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartError>;
}

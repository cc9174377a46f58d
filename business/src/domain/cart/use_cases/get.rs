use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct GetShoppingCartParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetShoppingCartUseCase: Send + Sync {
    async fn execute(&self, params: GetShoppingCartParams) -> Result<ShoppingCart, CartError>;
}

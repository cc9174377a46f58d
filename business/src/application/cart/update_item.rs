use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<CartItem, CartError> {
        self.logger
            .info(&format!("Updating cart item: {}", params.cart_item_id));

        let quantity = CartItem::validate_quantity(params.quantity)?;

        // Ownership is enforced by the write itself, so an item removed or
        // owned by someone else reads as missing.
        let updated = self
            .repository
            .update_item_quantity(params.cart_item_id, &params.user_id, quantity)
            .await?
            .ok_or_else(|| {
                self.logger.warn(&format!(
                    "Cart item {} not found in cart of user {}",
                    params.cart_item_id, params.user_id
                ));
                CartError::ItemNotFound
            })?;

        self.logger
            .info(&format!("Cart item updated: {}", updated.id));
        Ok(updated)
    }
}

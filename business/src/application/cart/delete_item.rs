use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete_item::{DeleteCartItemParams, DeleteCartItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Deleting cart item: {}", params.cart_item_id));

        let deleted = self
            .repository
            .delete_item(params.cart_item_id, &params.user_id)
            .await?;
        if !deleted {
            self.logger.warn(&format!(
                "Cart item {} not found in cart of user {}",
                params.cart_item_id, params.user_id
            ));
            return Err(CartError::ItemNotFound);
        }

        self.logger
            .info(&format!("Cart item deleted: {}", params.cart_item_id));
        Ok(())
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetShoppingCartParams, GetShoppingCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct GetShoppingCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

/// Each user owns exactly one cart, created on first access.
pub(crate) async fn load_or_create_cart(
    repository: &dyn CartRepository,
    logger: &dyn Logger,
    user_id: &UserId,
) -> Result<ShoppingCart, CartError> {
    if let Some(cart) = repository.find_by_user(user_id).await? {
        return Ok(cart);
    }

    logger.info(&format!("Creating shopping cart for user: {}", user_id));
    let cart = repository.create_for_user(user_id).await?;
    Ok(cart)
}

#[async_trait]
impl GetShoppingCartUseCase for GetShoppingCartUseCaseImpl {
    async fn execute(&self, params: GetShoppingCartParams) -> Result<ShoppingCart, CartError> {
        self.logger
            .info(&format!("Getting shopping cart for user: {}", params.user_id));

        let cart =
            load_or_create_cart(self.repository.as_ref(), self.logger.as_ref(), &params.user_id)
                .await?;

        self.logger.info(&format!(
            "Retrieved shopping cart {} with {} items",
            cart.id,
            cart.items.len()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_doubles::{
        MockCartRepo, cart_item, cart_with, mock_logger, test_user_id,
    };
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_existing_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart_with(vec![cart_item(1, 10, 2), cart_item(2, 11, 1)]))));
        mock_repo.expect_create_for_user().never();

        let use_case = GetShoppingCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetShoppingCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().items.len(), 2);
    }

    #[tokio::test]
    async fn should_create_empty_cart_on_first_access() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(None));
        mock_repo
            .expect_create_for_user()
            .times(1)
            .withf(|user_id| user_id.as_str() == "test-user-id")
            .returning(|_| Ok(cart_with(vec![])));

        let use_case = GetShoppingCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetShoppingCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetShoppingCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetShoppingCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(CartError::Repository(_))));
    }
}

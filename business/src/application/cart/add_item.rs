use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::get::load_or_create_cart;
use crate::domain::book::repository::BookRepository;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, ShoppingCart};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub book_repository: Arc<dyn BookRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<ShoppingCart, CartError> {
        self.logger.info(&format!(
            "Adding book {} (x{}) to cart of user: {}",
            params.book_id, params.quantity, params.user_id
        ));

        let quantity = CartItem::validate_quantity(params.quantity)?;

        self.book_repository
            .find_by_id(params.book_id)
            .await?
            .ok_or(CartError::BookNotFound)?;

        let cart =
            load_or_create_cart(self.repository.as_ref(), self.logger.as_ref(), &params.user_id)
                .await?;

        // The same book never occupies two lines; adding it again grows the existing one.
        self.repository
            .add_or_increment_item(cart.id, params.book_id, quantity)
            .await?;
        self.logger
            .info(&format!("Book {} added to cart {}", params.book_id, cart.id));

        let updated = self
            .repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::Repository(RepositoryError::NotFound))?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_doubles::{
        MockBookRepo, MockCartRepo, cart_item, cart_with, mock_logger, test_user_id,
    };
    use crate::domain::book::model::Book;

    fn book_repo_with(id: i64) -> MockBookRepo {
        let mut book_repo = MockBookRepo::new();
        book_repo.expect_find_by_id().returning(move |requested| {
            Ok((requested == id).then(|| Book {
                id,
                title: "The Rust Programming Language".to_string(),
            }))
        });
        book_repo
    }

    fn params(book_id: i64, quantity: i32) -> AddCartItemParams {
        AddCartItemParams {
            user_id: test_user_id(),
            book_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_add_book_and_return_reloaded_cart() {
        let mut mock_repo = MockCartRepo::new();
        let mut calls = mockall::Sequence::new();
        mock_repo
            .expect_find_by_user()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_| Ok(Some(cart_with(vec![]))));
        mock_repo
            .expect_add_or_increment_item()
            .withf(|cart_id, book_id, quantity| *cart_id == 1 && *book_id == 5 && *quantity == 2)
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_, _, _| Ok(()));
        mock_repo
            .expect_find_by_user()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_| Ok(Some(cart_with(vec![cart_item(1, 5, 2)]))));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            book_repository: Arc::new(book_repo_with(5)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 2)).await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_return_grown_line_when_book_already_in_cart() {
        let mut mock_repo = MockCartRepo::new();
        let mut calls = mockall::Sequence::new();
        mock_repo
            .expect_find_by_user()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_| Ok(Some(cart_with(vec![cart_item(9, 5, 3)]))));
        mock_repo
            .expect_add_or_increment_item()
            .withf(|cart_id, book_id, quantity| *cart_id == 1 && *book_id == 5 && *quantity == 2)
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_, _, _| Ok(()));
        mock_repo
            .expect_find_by_user()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_| Ok(Some(cart_with(vec![cart_item(9, 5, 5)]))));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            book_repository: Arc::new(book_repo_with(5)),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(5, 2)).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, 9);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_add_same_book_twice_without_failing() {
        // Both requests see the cart before either line exists; the repository
        // folds the second add into the first line.
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user().returning(|_| Ok(Some(cart_with(vec![]))));
        mock_repo
            .expect_add_or_increment_item()
            .times(2)
            .returning(|_, _, _| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            book_repository: Arc::new(book_repo_with(5)),
            logger: mock_logger(),
        };

        let (first, second) = tokio::join!(
            use_case.execute(params(5, 1)),
            use_case.execute(params(5, 1))
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn should_create_cart_before_first_item() {
        let mut mock_repo = MockCartRepo::new();
        let mut calls = mockall::Sequence::new();
        mock_repo
            .expect_find_by_user()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create_for_user()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_| Ok(cart_with(vec![])));
        mock_repo
            .expect_add_or_increment_item()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_, _, _| Ok(()));
        mock_repo
            .expect_find_by_user()
            .times(1)
            .in_sequence(&mut calls)
            .returning(|_| Ok(Some(cart_with(vec![cart_item(1, 5, 1)]))));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            book_repository: Arc::new(book_repo_with(5)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 1)).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().items.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_unknown_book() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_add_or_increment_item().never();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            book_repository: Arc::new(book_repo_with(5)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(404, 1)).await;

        assert!(matches!(result, Err(CartError::BookNotFound)));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity() {
        let mut book_repo = MockBookRepo::new();
        book_repo.expect_find_by_id().never();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(MockCartRepo::new()),
            book_repository: Arc::new(book_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 0)).await;

        assert!(matches!(result, Err(CartError::QuantityNotPositive)));
    }

    #[tokio::test]
    async fn should_propagate_book_lookup_failure() {
        let mut book_repo = MockBookRepo::new();
        book_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(MockCartRepo::new()),
            book_repository: Arc::new(book_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(5, 1)).await;

        assert!(matches!(result, Err(CartError::Repository(_))));
    }
}

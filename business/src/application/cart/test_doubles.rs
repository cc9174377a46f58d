use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::book::model::Book;
use crate::domain::book::repository::BookRepository;
use crate::domain::cart::model::{CartItem, ShoppingCart};
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn find_by_user(&self, user_id: &UserId) -> Result<Option<ShoppingCart>, RepositoryError>;
        async fn create_for_user(&self, user_id: &UserId) -> Result<ShoppingCart, RepositoryError>;
        async fn add_or_increment_item(&self, cart_id: i64, book_id: i64, quantity: i32) -> Result<(), RepositoryError>;
        async fn update_item_quantity(&self, item_id: i64, user_id: &UserId, quantity: i32) -> Result<Option<CartItem>, RepositoryError>;
        async fn delete_item(&self, item_id: i64, user_id: &UserId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub BookRepo {}

    #[async_trait]
    impl BookRepository for BookRepo {
        async fn find_by_id(&self, id: i64) -> Result<Option<Book>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-id")
}

pub fn cart_item(id: i64, book_id: i64, quantity: i32) -> CartItem {
    CartItem::from_repository(id, 1, book_id, format!("Book {}", book_id), quantity)
}

pub fn cart_with(items: Vec<CartItem>) -> ShoppingCart {
    ShoppingCart::from_repository(1, test_user_id(), items)
}

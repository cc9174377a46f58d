#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_not_positive")]
    QuantityNotPositive,
    #[error("cart.book_not_found")]
    BookNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

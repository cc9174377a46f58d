use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Book;

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, RepositoryError>;
}

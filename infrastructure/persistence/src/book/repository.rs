use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::book::model::Book;
use business::domain::book::repository::BookRepository;
use business::domain::errors::RepositoryError;

use super::entity::BookEntity;

pub struct BookRepositoryPostgres {
    pool: PgPool,
}

impl BookRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryPostgres {
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, RepositoryError> {
        let entity =
            sqlx::query_as::<_, BookEntity>("SELECT id, title FROM books WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to load book {id}: {e}");
                    RepositoryError::DatabaseError
                })?;

        Ok(entity.map(|e| e.into_domain()))
    }
}

use sqlx::FromRow;

use business::domain::book::model::Book;

#[derive(Debug, FromRow)]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
}

impl BookEntity {
    pub fn into_domain(self) -> Book {
        Book {
            id: self.id,
            title: self.title,
        }
    }
}

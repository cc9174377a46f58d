use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::{CartItem, ShoppingCart};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartItemEntity, ShoppingCartEntity};

const ITEM_COLUMNS: &str = "ci.id, ci.shopping_cart_id, ci.book_id, b.title AS book_title, ci.quantity";

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn items_of(&self, cart_id: i64) -> Result<Vec<CartItemEntity>, RepositoryError> {
        sqlx::query_as::<_, CartItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM cart_items ci JOIN books b ON b.id = ci.book_id WHERE ci.shopping_cart_id = $1 ORDER BY ci.id"
        ))
        .bind(cart_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Cart query failed: {e}");
    RepositoryError::DatabaseError
}

fn write_error(e: sqlx::Error) -> RepositoryError {
    let duplicated = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if duplicated {
        return RepositoryError::Duplicated;
    }
    database_error(e)
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ShoppingCart>, RepositoryError> {
        let cart = sqlx::query_as::<_, ShoppingCartEntity>(
            "SELECT id, user_id FROM shopping_carts WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match cart {
            Some(cart) => {
                let items = self.items_of(cart.id).await?;
                Ok(Some(cart.into_domain(items)))
            }
            None => Ok(None),
        }
    }

    async fn create_for_user(&self, user_id: &UserId) -> Result<ShoppingCart, RepositoryError> {
        // A concurrent request may have created the cart already; reuse that row.
        let cart = sqlx::query_as::<_, ShoppingCartEntity>(
            r#"INSERT INTO shopping_carts (user_id) VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id"#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        let items = self.items_of(cart.id).await?;
        Ok(cart.into_domain(items))
    }

    async fn add_or_increment_item(
        &self,
        cart_id: i64,
        book_id: i64,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_items (shopping_cart_id, book_id, quantity) VALUES ($1, $2, $3)
            ON CONFLICT (shopping_cart_id, book_id) DO UPDATE SET
                quantity = LEAST(cart_items.quantity::BIGINT + EXCLUDED.quantity, 2147483647)::INTEGER"#,
        )
        .bind(cart_id)
        .bind(book_id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn update_item_quantity(
        &self,
        item_id: i64,
        user_id: &UserId,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            r#"UPDATE cart_items ci SET quantity = $3
            FROM shopping_carts sc, books b
            WHERE ci.id = $1 AND sc.id = ci.shopping_cart_id AND sc.user_id = $2 AND b.id = ci.book_id
            RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(item_id)
        .bind(user_id.as_str())
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn delete_item(&self, item_id: i64, user_id: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"DELETE FROM cart_items ci USING shopping_carts sc
            WHERE ci.id = $1 AND sc.id = ci.shopping_cart_id AND sc.user_id = $2"#,
        )
        .bind(item_id)
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_book(pool: &PgPool, title: &str) -> i64 {
        sqlx::query_scalar("INSERT INTO books (title) VALUES ($1) RETURNING id")
            .bind(title)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn only_item(repository: &CartRepositoryPostgres, user_id: &UserId) -> CartItem {
        let cart = repository.find_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(cart.items.len(), 1);
        cart.items.into_iter().next().unwrap()
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL reachable through DATABASE_URL"]
    async fn should_leave_items_of_other_users_untouched(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let book_id = seed_book(&pool, "Dune").await;
        let me = UserId::new("reader-1");
        let other = UserId::new("reader-2");
        repository.create_for_user(&me).await.unwrap();
        let other_cart = repository.create_for_user(&other).await.unwrap();
        repository
            .add_or_increment_item(other_cart.id, book_id, 2)
            .await
            .unwrap();
        let other_item = only_item(&repository, &other).await;

        let updated = repository
            .update_item_quantity(other_item.id, &me, 9)
            .await
            .unwrap();
        let deleted = repository.delete_item(other_item.id, &me).await.unwrap();

        assert!(updated.is_none());
        assert!(!deleted);
        assert_eq!(only_item(&repository, &other).await.quantity, 2);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL reachable through DATABASE_URL"]
    async fn should_update_owned_item_with_book_title(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let book_id = seed_book(&pool, "Dune").await;
        let me = UserId::new("reader-1");
        let cart = repository.create_for_user(&me).await.unwrap();
        repository
            .add_or_increment_item(cart.id, book_id, 1)
            .await
            .unwrap();
        let item = only_item(&repository, &me).await;

        let updated = repository
            .update_item_quantity(item.id, &me, 4)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.book_title, "Dune");
        assert_eq!(updated.quantity, 4);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL reachable through DATABASE_URL"]
    async fn should_report_second_delete_as_missing(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let book_id = seed_book(&pool, "Dune").await;
        let me = UserId::new("reader-1");
        let cart = repository.create_for_user(&me).await.unwrap();
        repository
            .add_or_increment_item(cart.id, book_id, 1)
            .await
            .unwrap();
        let item = only_item(&repository, &me).await;

        assert!(repository.delete_item(item.id, &me).await.unwrap());
        assert!(!repository.delete_item(item.id, &me).await.unwrap());
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL reachable through DATABASE_URL"]
    async fn should_fold_repeated_adds_into_one_line(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let book_id = seed_book(&pool, "Dune").await;
        let me = UserId::new("reader-1");
        let cart = repository.create_for_user(&me).await.unwrap();

        let (first, second) = tokio::join!(
            repository.add_or_increment_item(cart.id, book_id, 2),
            repository.add_or_increment_item(cart.id, book_id, 3)
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(only_item(&repository, &me).await.quantity, 5);
    }

    #[sqlx::test(migrations = "../../migrations")]
    #[ignore = "needs PostgreSQL reachable through DATABASE_URL"]
    async fn should_cap_quantity_at_i32_max(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool.clone());
        let book_id = seed_book(&pool, "Dune").await;
        let me = UserId::new("reader-1");
        let cart = repository.create_for_user(&me).await.unwrap();

        repository
            .add_or_increment_item(cart.id, book_id, i32::MAX)
            .await
            .unwrap();
        repository
            .add_or_increment_item(cart.id, book_id, 10)
            .await
            .unwrap();

        assert_eq!(only_item(&repository, &me).await.quantity, i32::MAX);
    }
}

use sqlx::FromRow;

use business::domain::cart::model::{CartItem, ShoppingCart};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ShoppingCartEntity {
    pub id: i64,
    pub user_id: String,
}

impl ShoppingCartEntity {
    pub fn into_domain(self, items: Vec<CartItemEntity>) -> ShoppingCart {
        ShoppingCart::from_repository(
            self.id,
            UserId::new(self.user_id),
            items.into_iter().map(|i| i.into_domain()).collect(),
        )
    }
}

/// Cart line joined with the title of the book it references.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: i64,
    pub shopping_cart_id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub quantity: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.id,
            self.shopping_cart_id,
            self.book_id,
            self.book_title,
            self.quantity,
        )
    }
}

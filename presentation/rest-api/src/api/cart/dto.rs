use poem_openapi::Object;

use business::domain::cart::model::{CartItem, ShoppingCart};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateCartItemRequest {
    /// Book to put in the cart
    #[oai(validator(minimum(value = "1")))]
    pub book_id: i64,
    /// Number of copies to add (at least 1)
    #[oai(validator(minimum(value = "1")))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemUpdateRequest {
    /// New number of copies (at least 1)
    #[oai(validator(minimum(value = "1")))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    /// Cart item identifier
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub quantity: i32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            book_id: item.book_id,
            book_title: item.book_title,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingCartResponse {
    /// Shopping cart identifier
    pub id: i64,
    /// Owner of the cart
    pub user_id: String,
    /// Lines in insertion order
    pub cart_items: Vec<CartItemResponse>,
}

impl From<ShoppingCart> for ShoppingCartResponse {
    fn from(cart: ShoppingCart) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id.to_string(),
            cart_items: cart.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}

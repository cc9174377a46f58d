use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::delete_item::{
    DeleteCartItemParams, DeleteCartItemUseCase,
};
use business::domain::cart::use_cases::get::{GetShoppingCartParams, GetShoppingCartUseCase};
use business::domain::cart::use_cases::update_item::{
    UpdateCartItemParams, UpdateCartItemUseCase,
};

use crate::api::cart::dto::{
    CartItemResponse, CartItemUpdateRequest, CreateCartItemRequest, ShoppingCartResponse,
};
use crate::api::error::{ErrorResponse, FromErrorResponse, rejection};
use crate::api::security::UserBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetShoppingCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
    delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetShoppingCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
        delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_item_use_case,
            delete_item_use_case,
        }
    }
}

/// Shopping cart API
///
/// Actions on the authenticated user's shopping cart. Every endpoint
/// requires a bearer token granting the `user` role.
#[OpenApi]
impl CartApi {
    /// Get a shopping cart
    ///
    /// Retrieves the caller's shopping cart, creating an empty one on first access.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::ShoppingCart")]
    async fn get_shopping_cart(&self, auth: UserBearer) -> GetShoppingCartResponse {
        let params = GetShoppingCartParams {
            user_id: auth.0.user_id,
        };

        match self.get_use_case.execute(params).await {
            Ok(cart) => GetShoppingCartResponse::Ok(Json(cart.into())),
            Err(err) => GetShoppingCartResponse::from_error(err),
        }
    }

    /// Add new item to a cart
    ///
    /// Adds copies of a book to the caller's cart. Adding a book that is
    /// already in the cart increases that line's quantity.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::ShoppingCart")]
    async fn add_to_cart(
        &self,
        auth: UserBearer,
        body: Json<CreateCartItemRequest>,
    ) -> AddCartItemResponse {
        let params = AddCartItemParams {
            user_id: auth.0.user_id,
            book_id: body.0.book_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddCartItemResponse::Ok(Json(cart.into())),
            Err(err) => AddCartItemResponse::from_error(err),
        }
    }

    /// Update a cart item
    ///
    /// Sets the quantity of an item in the caller's cart.
    #[oai(
        path = "/cart/cart-items/:cartItemId",
        method = "put",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn update_cart_item(
        &self,
        auth: UserBearer,
        #[oai(name = "cartItemId", validator(minimum(value = "1")))] cart_item_id: Path<i64>,
        body: Json<CartItemUpdateRequest>,
    ) -> UpdateCartItemResponse {
        let params = UpdateCartItemParams {
            user_id: auth.0.user_id,
            cart_item_id: cart_item_id.0,
            quantity: body.0.quantity,
        };

        match self.update_item_use_case.execute(params).await {
            Ok(item) => UpdateCartItemResponse::Ok(Json(item.into())),
            Err(err) => UpdateCartItemResponse::from_error(err),
        }
    }

    /// Delete a cart item
    ///
    /// Removes an item from the caller's cart.
    #[oai(
        path = "/cart/cart-items/:cartItemId",
        method = "delete",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn delete_cart_item(
        &self,
        auth: UserBearer,
        #[oai(name = "cartItemId", validator(minimum(value = "1")))] cart_item_id: Path<i64>,
    ) -> DeleteCartItemResponse {
        let params = DeleteCartItemParams {
            user_id: auth.0.user_id,
            cart_item_id: cart_item_id.0,
        };

        match self.delete_item_use_case.execute(params).await {
            Ok(()) => DeleteCartItemResponse::NoContent,
            Err(err) => DeleteCartItemResponse::from_error(err),
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_shopping_cart_rejected")]
pub enum GetShoppingCartResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingCartResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl FromErrorResponse for GetShoppingCartResponse {
    fn from_error_response(status: StatusCode, json: Json<ErrorResponse>) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized(json),
            403 => Self::Forbidden(json),
            _ => Self::InternalError(json),
        }
    }
}

fn get_shopping_cart_rejected(err: poem::Error) -> GetShoppingCartResponse {
    let (status, json) = rejection(err);
    GetShoppingCartResponse::from_error_response(status, json)
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "add_to_cart_rejected")]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl FromErrorResponse for AddCartItemResponse {
    fn from_error_response(status: StatusCode, json: Json<ErrorResponse>) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

fn add_to_cart_rejected(err: poem::Error) -> AddCartItemResponse {
    let (status, json) = rejection(err);
    AddCartItemResponse::from_error_response(status, json)
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_cart_item_rejected")]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl FromErrorResponse for UpdateCartItemResponse {
    fn from_error_response(status: StatusCode, json: Json<ErrorResponse>) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

fn update_cart_item_rejected(err: poem::Error) -> UpdateCartItemResponse {
    let (status, json) = rejection(err);
    UpdateCartItemResponse::from_error_response(status, json)
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_cart_item_rejected")]
pub enum DeleteCartItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl FromErrorResponse for DeleteCartItemResponse {
    fn from_error_response(status: StatusCode, json: Json<ErrorResponse>) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            401 => Self::Unauthorized(json),
            403 => Self::Forbidden(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}

fn delete_cart_item_rejected(err: poem::Error) -> DeleteCartItemResponse {
    let (status, json) = rejection(err);
    DeleteCartItemResponse::from_error_response(status, json)
}

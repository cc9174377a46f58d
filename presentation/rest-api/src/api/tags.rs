use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service liveness
    Health,
    /// Actions on the caller's shopping cart
    ShoppingCart,
}

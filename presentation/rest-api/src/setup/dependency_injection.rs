use std::sync::Arc;

use logger::TracingLogger;
use persistence::book::repository::BookRepositoryPostgres;
use persistence::cart::repository::CartRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::delete_item::DeleteCartItemUseCaseImpl;
use business::application::cart::get::GetShoppingCartUseCaseImpl;
use business::application::cart::update_item::UpdateCartItemUseCaseImpl;

use crate::api::security::JwtVerifier;
use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub jwt_verifier: Arc<JwtVerifier>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, auth: &AuthConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let book_repository = Arc::new(BookRepositoryPostgres::new(pool));

        // Cart use cases
        let get_use_case = Arc::new(GetShoppingCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            book_repository,
            logger: logger.clone(),
        });
        let update_item_use_case = Arc::new(UpdateCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteCartItemUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_use_case,
            add_item_use_case,
            update_item_use_case,
            delete_item_use_case,
        );

        Self {
            health_api,
            cart_api,
            jwt_verifier: Arc::new(JwtVerifier::new(auth)),
        }
    }
}

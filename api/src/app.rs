//! Application state and factory
//!
//! This module holds the shared services and builds the Actix-web
//! application with every route and middleware attached.

use std::sync::Arc;

use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use blog_core::repositories::{ArticleRepository, UserRepository};
use blog_core::services::{BlogService, TokenService, UserService};
use blog_shared::config::{CorsConfig, Environment};

use crate::handlers::json_error_handler;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes;

/// Application state that holds shared services
pub struct AppState<U, A>
where
    U: UserRepository,
    A: ArticleRepository,
{
    pub user_service: Arc<UserService<U>>,
    pub blog_service: Arc<BlogService<A>>,
    pub token_service: Arc<TokenService>,
}

impl<U, A> AppState<U, A>
where
    U: UserRepository,
    A: ArticleRepository,
{
    pub fn new(
        user_service: Arc<UserService<U>>,
        blog_service: Arc<BlogService<A>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_service,
            blog_service,
            token_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, A>(
    app_state: web::Data<AppState<U, A>>,
    environment: Environment,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    let jwt_auth = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Last registered runs first: the request span wraps CORS
        .wrap(create_cors(environment, cors_config))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/api")
                .route("/user", web::post().to(routes::auth::signup::<U, A>))
                .route("/login", web::post().to(routes::auth::login::<U, A>))
                .configure(|cfg| routes::articles::configure::<U, A>(cfg, jwt_auth)),
        )
        .configure(routes::views::configure::<U, A>)
        .default_service(web::route().to(routes::not_found))
}

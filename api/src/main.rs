use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use blog_api::{create_app, telemetry, AppState};
use blog_core::services::{
    BlogService, TokenService, TokenServiceConfig, UserService, UserServiceConfig,
};
use blog_infra::database::{DatabasePool, MySqlArticleRepository, MySqlUserRepository};
use blog_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = blog_infra::load_dotenv();

    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging).context("failed to install tracing subscriber")?;

    tracing::info!(
        environment = %config.environment,
        dotenv = ?dotenv_path,
        "Starting Inkwell API server"
    );

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            tracing::warn!(
                "JWT_SECRET_KEY is not set; tokens are signed with the built-in development secret"
            );
        } else {
            tracing::debug!("Using the development JWT secret");
        }
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to database")?;
    let pool = database.get_pool().clone();

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let article_repository = Arc::new(MySqlArticleRepository::new(pool));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&token_service),
        UserServiceConfig::from_jwt(&config.jwt),
    ));
    let blog_service = Arc::new(BlogService::new(article_repository));

    let app_state = web::Data::new(AppState::new(user_service, blog_service, token_service));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let environment = config.environment;
    let cors_config = config.cors.clone();
    let mut server =
        HttpServer::new(move || create_app(app_state.clone(), environment, &cors_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

//! JSON article API under `/api/articles`
//!
//! Reads are public. Create, update and delete run behind [`JwtAuth`].

use actix_web::{web, HttpResponse};
use validator::Validate;

use blog_core::repositories::{ArticleRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{ArticleRequest, ArticleResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::{AuthContext, JwtAuth};

/// Register the article routes
pub fn configure<U, A>(cfg: &mut web::ServiceConfig, jwt_auth: JwtAuth)
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    cfg.service(
        web::resource("/articles")
            .route(web::get().to(list_articles::<U, A>))
            .route(
                web::post()
                    .to(create_article::<U, A>)
                    .wrap(jwt_auth.clone()),
            ),
    )
    .service(
        web::resource("/articles/{id}")
            .route(web::get().to(get_article::<U, A>))
            .route(
                web::put()
                    .to(update_article::<U, A>)
                    .wrap(jwt_auth.clone()),
            )
            .route(
                web::delete()
                    .to(delete_article::<U, A>)
                    .wrap(jwt_auth),
            ),
    );
}

/// GET /api/articles
pub async fn list_articles<U, A>(state: web::Data<AppState<U, A>>) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    match state.blog_service.find_all().await {
        Ok(articles) => HttpResponse::Ok().json(
            articles
                .into_iter()
                .map(ArticleResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /api/articles/{id}
pub async fn get_article<U, A>(
    state: web::Data<AppState<U, A>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    match state.blog_service.find_by_id(path.into_inner()).await {
        Ok(article) => HttpResponse::Ok().json(ArticleResponse::from(article)),
        Err(error) => handle_domain_error(&error),
    }
}

/// POST /api/articles
///
/// The authenticated caller becomes the author. Responds 201 with the
/// stored article.
pub async fn create_article<U, A>(
    state: web::Data<AppState<U, A>>,
    auth: AuthContext,
    request: web::Json<ArticleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .blog_service
        .save(request.into(), &auth.principal)
        .await
    {
        Ok(article) => HttpResponse::Created().json(article),
        Err(error) => handle_domain_error(&error),
    }
}

/// PUT /api/articles/{id}
pub async fn update_article<U, A>(
    state: web::Data<AppState<U, A>>,
    auth: AuthContext,
    path: web::Path<i64>,
    request: web::Json<ArticleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .blog_service
        .update(path.into_inner(), request.into(), &auth.principal)
        .await
    {
        Ok(article) => HttpResponse::Ok().json(article),
        Err(error) => handle_domain_error(&error),
    }
}

/// DELETE /api/articles/{id}
pub async fn delete_article<U, A>(
    state: web::Data<AppState<U, A>>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    let id = path.into_inner();
    match state.blog_service.delete(id, &auth.principal).await {
        Ok(()) => {
            tracing::debug!(article_id = id, user_id = auth.user_id, "Article removed via API");
            HttpResponse::Ok().finish()
        }
        Err(error) => handle_domain_error(&error),
    }
}

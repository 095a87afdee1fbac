//! View models for the article pages
//!
//! The page routes return the data a template would render, as JSON.

use actix_web::{web, HttpResponse};

use blog_core::repositories::{ArticleRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{ArticleFormView, ArticleListViewResponse, ArticleViewResponse, NewArticleQuery};
use crate::handlers::handle_domain_error;

pub fn configure<U, A>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    cfg.route("/articles", web::get().to(article_list_view::<U, A>))
        .route("/articles/{id}", web::get().to(article_view::<U, A>))
        .route("/new-article", web::get().to(new_article_view::<U, A>));
}

/// GET /articles
pub async fn article_list_view<U, A>(state: web::Data<AppState<U, A>>) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    match state.blog_service.find_all().await {
        Ok(articles) => HttpResponse::Ok().json(
            articles
                .into_iter()
                .map(ArticleListViewResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /articles/{id}
pub async fn article_view<U, A>(
    state: web::Data<AppState<U, A>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    match state.blog_service.find_by_id(path.into_inner()).await {
        Ok(article) => HttpResponse::Ok().json(ArticleViewResponse::from(article)),
        Err(error) => handle_domain_error(&error),
    }
}

/// GET /new-article?id=
///
/// Without `id` the form is empty; with it the form is filled from the
/// stored article.
pub async fn new_article_view<U, A>(
    state: web::Data<AppState<U, A>>,
    query: web::Query<NewArticleQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: ArticleRepository + 'static,
{
    let Some(id) = query.id else {
        return HttpResponse::Ok().json(ArticleFormView::default());
    };

    match state.blog_service.find_by_id(id).await {
        Ok(article) => HttpResponse::Ok().json(ArticleFormView::from(article)),
        Err(error) => handle_domain_error(&error),
    }
}

//! Account routes: signup and login

use actix_web::{web, HttpResponse};
use validator::Validate;

use blog_core::repositories::{ArticleRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{LoginRequest, SignupRequest, SignupResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/user
///
/// # Request Body
///
/// ```json
/// { "email": "user@email.com", "password": "secret" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "id": 1, "email": "user@email.com" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email or password too short
/// - 409 Conflict: email already registered
pub async fn signup<U, A>(
    state: web::Data<AppState<U, A>>,
    request: web::Json<SignupRequest>,
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
        .user_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(SignupResponse {
            id: user.id,
            email: user.email,
        }),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "access_token": "eyJ...", "token_type": "Bearer", "expires_in": 7200 }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: wrong password
/// - 404 Not Found: no account for this email
pub async fn login<U, A>(
    state: web::Data<AppState<U, A>>,
    request: web::Json<LoginRequest>,
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
        .user_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(token),
        Err(error) => handle_domain_error(&error),
    }
}

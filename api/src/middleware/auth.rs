//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts bearer tokens from the Authorization header,
//! checks them with the core `TokenService`, and injects the caller's
//! identity into request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use blog_core::{
    domain::entities::token::Principal, errors::DomainError, services::token::TokenService,
};
use blog_shared::{error_codes, ErrorResponse};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the token's `id` claim
    pub user_id: i64,
    /// Identity decoded from the token subject
    pub principal: Principal,
}

impl AuthContext {
    /// Build the context from an already validated token
    pub fn from_token(token_service: &TokenService, token: &str) -> Result<Self, DomainError> {
        Ok(Self {
            user_id: token_service.extract_user_id(token)?,
            principal: token_service.decode_identity(token)?,
        })
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    tracing::debug!(path = %req.path(), "Missing bearer token");
                    return Ok(unauthorized(req, "Missing or invalid Authorization header"));
                }
            };

            if !token_service.is_valid(&token) {
                return Ok(unauthorized(req, "Invalid or expired token"));
            }

            let auth_context = match AuthContext::from_token(&token_service, &token) {
                Ok(context) => context,
                Err(e) => {
                    tracing::debug!(error = %e, "Token accepted but identity could not be decoded");
                    return Ok(unauthorized(req, "Invalid token claims"));
                }
            };

            req.extensions_mut().insert(auth_context);

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn unauthorized<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response =
        HttpResponse::Unauthorized().json(ErrorResponse::new(error_codes::UNAUTHORIZED, message));
    req.into_response(response).map_into_right_body()
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}

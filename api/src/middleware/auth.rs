//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware extracts the bearer token from the Authorization header,
//! verifies the HS256 signature and expiry, and injects the authenticated
//! user's id into request extensions for handlers to extract.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use chrono::{Duration, Utc};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use rh_core::errors::{DomainError, DomainResult};
use rh_shared::config::AuthConfig;
use rh_shared::types::response::ErrorResponse;

/// JWT claims carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Sign an access token for `user_id`
pub fn issue_token(user_id: Uuid, config: &AuthConfig) -> DomainResult<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iss: config.issuer.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(config.token_expiry_minutes)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| DomainError::Internal {
        message: format!("Token signing failed: {}", e),
    })
}

/// Verify a token and return the authenticated user's id
pub fn verify_token(token: &str, config: &AuthConfig) -> Result<Uuid, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("Token decode error: {}", e))?;

    Uuid::parse_str(&data.claims.sub).map_err(|e| format!("Invalid subject: {}", e))
}

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from JWT claims
    pub user_id: Uuid,
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    config: AuthConfig,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            config: self.config.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    config: AuthConfig,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let config = self.config.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(unauthorized(req, "Missing or invalid Authorization header"));
                }
            };

            let user_id = match verify_token(&token, &config) {
                Ok(user_id) => user_id,
                Err(e) => {
                    log::debug!("Token verification failed: {}", e);
                    return Ok(unauthorized(req, "Invalid or expired token"));
                }
            };

            req.extensions_mut().insert(AuthContext { user_id });
            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}

/// Short-circuits the request with a 401 carrying the standard error envelope
fn unauthorized<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized()
        .json(ErrorResponse::new("UNAUTHORIZED", message))
        .map_into_right_body();
    req.into_response(response)
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
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
    use actix_web::test;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_expiry_minutes: 60,
            issuer: "renthub".to_string(),
        }
    }

    #[actix_rt::test]
    async fn test_issue_then_verify_round_trips() {
        let config = config();
        let user_id = Uuid::new_v4();

        let token = issue_token(user_id, &config).unwrap();
        assert_eq!(verify_token(&token, &config).unwrap(), user_id);
    }

    #[actix_rt::test]
    async fn test_wrong_secret_is_rejected() {
        let config = config();
        let token = issue_token(Uuid::new_v4(), &config).unwrap();

        let other = AuthConfig {
            jwt_secret: "other-secret".to_string(),
            ..config
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[actix_rt::test]
    async fn test_expired_token_is_rejected() {
        let config = AuthConfig {
            token_expiry_minutes: -5,
            ..config()
        };
        let token = issue_token(Uuid::new_v4(), &config).unwrap();

        assert!(verify_token(&token, &config).is_err());
    }

    #[actix_rt::test]
    async fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}

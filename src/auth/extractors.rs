use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::{Claims, TokenManager};
use crate::error::AppError;

/// Extracts the authenticated user's ID for a handler.
///
/// Behind `JwtGuard` the claims are already in the request extensions and are
/// used directly. On routes without the guard (individual protected handlers
/// inside the otherwise-public API group) the extractor verifies the Bearer
/// token itself against the shared `TokenManager`.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub i32);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(claims) = req.extensions().get::<Claims>() {
            return ready(Ok(AuthenticatedUser(claims.sub)));
        }

        let tokens = match req.app_data::<web::Data<TokenManager>>() {
            Some(tokens) => tokens,
            None => {
                let err =
                    AppError::InternalServerError("Token manager not configured".to_string());
                return ready(Err(err.into()));
            }
        };

        let bearer = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match bearer {
            Some(token) => match tokens.verify(token) {
                Ok(claims) => ready(Ok(AuthenticatedUser(claims.sub))),
                Err(err) => ready(Err(err.into())),
            },
            None => {
                let err = AppError::Unauthorized("Missing token".to_string());
                ready(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_rt::test]
    async fn test_extractor_reads_claims_from_extensions() {
        let req = test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(Claims { sub: 123, exp: 0 });

        let mut payload = Payload::None;
        let extracted = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert_eq!(extracted.unwrap().0, 123);
    }

    #[actix_rt::test]
    async fn test_extractor_verifies_bearer_token() {
        let manager = TokenManager::new("extractor-secret");
        let token = manager.generate(7).unwrap();

        let req = test::TestRequest::default()
            .app_data(web::Data::new(manager))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request();

        let mut payload = Payload::None;
        let extracted = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert_eq!(extracted.unwrap().0, 7);
    }

    #[actix_rt::test]
    async fn test_extractor_rejects_missing_token() {
        let req = test::TestRequest::default()
            .app_data(web::Data::new(TokenManager::new("extractor-secret")))
            .to_http_request();

        let mut payload = Payload::None;
        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }
}

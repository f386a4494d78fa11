//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//! `Required` 모드에서는 핸들러와 추출기(JSON 본문 포함)가 실행되기 전에 401을 반환합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 유효한 토큰이 없으면 401
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 토큰이 유효하면 사용자 정보를 저장하고, 아니면 익명으로 진행
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    use super::*;
    use crate::config::{AppSettings, Environment};
    use crate::core::registry::ServiceLocator;
    use crate::domain::entities::users::User;
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(format!("{}:{}", user.user_id, user.email))
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(user.actor())
    }

    fn locator() -> Arc<ServiceLocator> {
        let locator = Arc::new(ServiceLocator::new());
        locator.set(Arc::new(AppSettings::for_environment(Environment::Test)));
        locator
    }

    fn token_for(locator: &ServiceLocator) -> String {
        let user = User {
            id: 3,
            email: "bran@example.com".to_string(),
            first_name: None,
            last_name: None,
            password_hash: String::new(),
            created_at: "2024-01-01".to_string(),
            updated_at: "2024-01-01".to_string(),
        };
        locator.get::<TokenService>().unwrap().issue_token(&user).unwrap()
    }

    #[actix_web::test]
    async fn test_required_mode() {
        let locator = locator();
        let token = token_for(&locator);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(locator))
                .service(web::scope("/private").wrap(AuthMiddleware::required()).route("", web::get().to(whoami))),
        )
        .await;

        let anonymous = test::call_service(&app, test::TestRequest::get().uri("/private").to_request()).await;
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(anonymous).await;
        assert_eq!(body["error"], "authentication_required");

        let bad = test::TestRequest::get()
            .uri("/private")
            .insert_header(("Authorization", "Bearer nope"))
            .to_request();
        assert_eq!(test::call_service(&app, bad).await.status(), StatusCode::UNAUTHORIZED);

        let ok = test::TestRequest::get()
            .uri("/private")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, ok).await;
        assert_eq!(body, "3:bran@example.com");
    }

    #[actix_web::test]
    async fn test_optional_mode_allows_anonymous() {
        let locator = locator();
        let token = token_for(&locator);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(locator))
                .service(web::scope("/public").wrap(AuthMiddleware::optional()).route("", web::get().to(maybe))),
        )
        .await;

        let anonymous = test::call_and_read_body(&app, test::TestRequest::get().uri("/public").to_request()).await;
        assert_eq!(anonymous, "anonymous");

        let authed = test::TestRequest::get()
            .uri("/public")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, authed).await, "bran@example.com");
    }

    #[actix_web::test]
    async fn test_missing_locator_is_server_error() {
        let app = test::init_service(
            App::new()
                .service(web::scope("/private").wrap(AuthMiddleware::required()).route("", web::get().to(whoami)))
                .service(web::scope("/public").wrap(AuthMiddleware::optional()).route("", web::get().to(maybe))),
        )
        .await;

        for uri in ["/private", "/public"] {
            let req = test::TestRequest::get()
                .uri(uri)
                .insert_header(("Authorization", "Bearer whatever"))
                .to_request();
            let response = test::call_service(&app, req).await;
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        }
    }
}

use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 id (`uid` 클레임)
    pub user_id: i64,

    /// 로그인 이메일 (`sub` 클레임)
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 요청 확장에 넣어둔 값을 꺼냅니다. 없으면 401 입니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    /// 로그용 주체 이름. 익명이면 `anonymous`
    pub fn actor(&self) -> String {
        self.0
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_else(|| "anonymous".to_string())
    }
}

impl FromRequest for OptionalUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: 7,
            email: "arya@example.com".to_string(),
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id, 7);

        let optional = OptionalUser::extract(&req).await.unwrap();
        assert_eq!(optional.actor(), "arya@example.com");
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(
            AuthenticatedUser::extract(&req).await,
            Err(AppError::AuthenticationError(_))
        ));
        assert_eq!(OptionalUser::extract(&req).await.unwrap().actor(), "anonymous");
    }
}

//! 사용자 엔티티

use serde::{Deserialize, Serialize};

/// `users` 테이블 행
///
/// Redis 캐시에 JSON으로 저장되므로 `Serialize`/`Deserialize`를 구현합니다.
/// 클라이언트 응답에는 [`UserResponse`](crate::domain::dto::users::UserResponse)를 사용하며
/// `password_hash`는 절대 노출하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// "이름 성" 형태의 표시 이름. 둘 다 없으면 이메일
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// 저장 전 사용자 데이터 (비밀번호는 이미 해싱됨)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first_name: Option<&str>, last_name: Option<&str>) -> User {
        User {
            id: 1,
            email: "jon@example.com".to_string(),
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            password_hash: "$2b$04$hash".to_string(),
            created_at: "2024-01-01".to_string(),
            updated_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(user(Some("Jon"), Some("Snow")).display_name(), "Jon Snow");
        assert_eq!(user(Some("Jon"), None).display_name(), "Jon");
        assert_eq!(user(None, None).display_name(), "jon@example.com");
    }
}

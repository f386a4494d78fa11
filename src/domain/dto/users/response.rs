use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::users::User;

/// 사용자 응답. 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "2024-05-01")]
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            created_at,
            ..
        } = user;

        Self {
            id,
            email,
            first_name,
            last_name,
            created_at,
        }
    }
}

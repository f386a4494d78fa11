use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::string_utils::{deserialize_optional_string, not_blank};

/// 회원 가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[schema(example = "jon@example.com")]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,

    #[validate(length(min = 3, message = "비밀번호는 최소 3자 이상이어야 합니다"))]
    pub password: String,
}

/// 사용자 수정 요청. 전달된 필드만 변경합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub first_name: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub last_name: Option<String>,

    #[validate(length(min = 3, message = "비밀번호는 최소 3자 이상이어야 합니다"))]
    pub password: Option<String>,
}

/// 로그인 요청. `username`은 이메일입니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "hexlet@example.com")]
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let valid = UserCreateRequest {
            email: "jon@example.com".to_string(),
            first_name: Some("Jon".to_string()),
            last_name: None,
            password: "abc".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = UserCreateRequest { email: "not_email".to_string(), ..valid.clone() };
        assert!(bad_email.validate().is_err());

        let short_password = UserCreateRequest { password: "qw".to_string(), ..valid };
        let errors = short_password.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_create_request_requires_password() {
        let result = serde_json::from_str::<UserCreateRequest>(r#"{"email": "jon@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_validates_only_present_fields() {
        assert!(UserUpdateRequest::default().validate().is_ok());

        let blank_name = UserUpdateRequest {
            first_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank_name.validate().is_err());

        let short_password: UserUpdateRequest = serde_json::from_str(r#"{"password": "qw"}"#).unwrap();
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_camel_case_field_names() {
        let request: UserCreateRequest = serde_json::from_str(
            r#"{"email": "a@b.io", "firstName": " Arya ", "lastName": "", "password": "needle"}"#,
        )
        .unwrap();

        assert_eq!(request.first_name.as_deref(), Some("Arya"));
        assert_eq!(request.last_name, None);
    }
}

//! 문자열 정규화 및 검증 유틸리티

use serde::Deserialize;
use validator::ValidationError;

/// 공백을 제거하고, 비어 있으면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `validator` 커스텀 검증: 공백만 있는 문자열 거부
///
/// ```rust,ignore
/// #[validate(custom(function = "not_blank"))]
/// pub first_name: Option<String>,
/// ```
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        Ok(())
    } else {
        Err(ValidationError::new("blank").with_message("공백일 수 없습니다".into()))
    }
}

/// 이메일 비교용 정규화 (공백 제거, 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 빈 문자열을 `None`으로 바꾸는 serde 역직렬화 함수
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

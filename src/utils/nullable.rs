//! 부분 수정(PUT) 요청의 "필드 없음"과 "명시적 null" 구분
//!
//! | JSON | 필드 값 |
//! |------|---------|
//! | 필드 없음 | `None` |
//! | `"field": null` | `Some(None)` |
//! | `"field": 3` | `Some(Some(3))` |
//!
//! ```rust,ignore
//! #[derive(Deserialize)]
//! struct TaskUpdateRequest {
//!     #[serde(default, deserialize_with = "deserialize_some")]
//!     assignee_id: Option<Option<i64>>,
//! }
//! ```

use serde::{Deserialize, Deserializer};

/// 값이 존재하면 `Some`으로 감싸서 역직렬화합니다. `#[serde(default)]`와 함께 사용합니다.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// 요청 값이 있으면 교체하고, 없으면 현재 값을 유지합니다.
pub fn merge<T>(current: T, patch: Option<T>) -> T {
    patch.unwrap_or(current)
}

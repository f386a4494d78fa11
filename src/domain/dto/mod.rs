//! 요청/응답 DTO
//!
//! 요청 DTO는 `validator`로 검증하고, 응답 DTO는 엔티티에서 `From`으로 변환합니다.
//! 필드명은 camelCase 입니다. 태스크의 `assignee_id`만 snake_case로 노출합니다.

pub mod users;
pub mod task_statuses;
pub mod labels;
pub mod tasks;

pub use users::*;
pub use task_statuses::*;
pub use labels::*;
pub use tasks::*;

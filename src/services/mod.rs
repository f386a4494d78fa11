//! 비즈니스 로직 계층
//!
//! 서비스는 `register_service!`로 `ServiceLocator`에 등록되며, 생성 시 필요한
//! 리포지토리와 `AppSettings`를 로케이터에서 주입받습니다. 핸들러에는
//! 엔티티 대신 응답 DTO를 돌려줍니다.
//!
//! | 서비스 | 담당 |
//! |--------|------|
//! | [`UserService`](users::UserService) | 사용자 CRUD, 비밀번호 검증 |
//! | [`TaskStatusService`](task_statuses::TaskStatusService) | 태스크 상태 CRUD |
//! | [`LabelService`](labels::LabelService) | 라벨 CRUD |
//! | [`TaskService`](tasks::TaskService) | 태스크 CRUD, 필터 |
//! | [`TokenService`](auth::TokenService) | JWT 발급/검증, JWKS |
//! | [`DataInitializer`](initializer::DataInitializer) | 초기 데이터 |

pub mod users;
pub mod task_statuses;
pub mod labels;
pub mod tasks;
pub mod auth;
pub mod initializer;

pub use users::UserService;
pub use task_statuses::TaskStatusService;
pub use labels::LabelService;
pub use tasks::TaskService;
pub use auth::TokenService;
pub use initializer::DataInitializer;

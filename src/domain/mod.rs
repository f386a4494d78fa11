//! # Domain Layer Module
//!
//! 도메인 계층. Spring의 Domain Layer와 같은 역할을 합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 테이블 행과 1:1 대응 (JPA Entity와 유사)
//! ├── DTOs      - API 요청/응답 계약
//! └── Models    - 인증 사용자, JWT 클레임 등 영속되지 않는 값 객체
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | [`entities`] | 영속 객체 |
//! | `@RequestBody` / `@ResponseBody` | [`dto`] | API 계약 |
//! | `@Valid` | `validator::Validate` | 입력 검증 |
//! | `Authentication` | [`models::auth::AuthenticatedUser`] | 인증 주체 |
//!
//! ## 태스크 생성 플로우
//!
//! ```rust,ignore
//! // 1. DTO로 입력 받기 + 검증
//! request.validate()?;
//!
//! // 2. 서비스가 상태 슬러그/담당자/라벨을 id로 해석해 TaskDraft 생성
//! let task = task_service.create(request).await?;
//!
//! // 3. 응답 DTO로 변환 (name → title, description → content)
//! let response = TaskResponse::from(task);
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;

//! 태스크 매니저 백엔드
//!
//! 사용자, 태스크 상태, 라벨, 태스크를 관리하는 REST API 서비스입니다.
//! JWT 기반 인증과 `inventory` 레지스트리를 활용한 의존성 주입을 제공합니다.
//!
//! # Features
//!
//! - **리소스 CRUD**: 사용자, 태스크 상태, 라벨, 태스크
//! - **태스크 필터링**: 제목, 담당자, 상태 슬러그, 라벨 조건
//! - **JWT 인증**: HS256 또는 RS256 (RS256은 JWKS 공개)
//! - **레지스트리 DI**: `register_service!`/`register_repository!` 자동 등록
//! - **SQLite/PostgreSQL**: sqlx `Any` 드라이버
//! - **Redis**: 선택적 사용자 조회 캐시
//! - **OpenAPI**: `GET /v3/api-docs`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 스코프별 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙, 참조 무결성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← SQL, 캐시
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  SQL DB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use task_manager_backend::core::registry::ServiceLocator;
//! use task_manager_backend::routes::configure_app;
//!
//! let locator = Arc::new(ServiceLocator::new());
//! locator.set(Arc::new(database));
//! locator.set(Arc::new(AppSettings::from_env()));
//! locator.initialize_all()?;
//!
//! let app = App::new().configure(configure_app(locator));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod docs;

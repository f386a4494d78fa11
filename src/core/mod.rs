//! # Core Framework Module
//!
//! 백엔드 전역에서 사용하는 핵심 프레임워크 기능입니다.
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext 역할
//! - **자동 레지스트리**: `inventory` 기반 링크 타임 컴포넌트 등록
//! - **지연 생성**: 최초 조회 시 생성자 주입으로 인스턴스 생성
//! - **요청 주입**: `Inject<T>` 추출기
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: TaskService
//! Internal server error: Circular dependency detected: TaskService is already being initialized
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! Internal server error: 등록되지 않은 컴포넌트: Database. ServiceLocator::set() ...
//! ```
//! **해결**: `main`에서 `locator.set(Arc::new(database))` 호출 여부 확인

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::{Component, Inject, ServiceLocator};

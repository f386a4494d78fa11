//! 환경 변수 기반 설정 모듈
//!
//! - [`data_config`]: 실행 환경, 서버, 데이터베이스, 캐시, Rate Limit, CORS
//! - [`auth_config`]: JWT 서명 및 초기 관리자 계정
//! - [`settings`]: 시작 시 확정되어 레지스트리에 등록되는 `AppSettings`

pub mod data_config;
pub mod auth_config;
pub mod settings;

pub use data_config::*;
pub use auth_config::*;
pub use settings::*;

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::http::header;
use serde::de::DeserializeOwned;
use serde_json::Value;

use task_manager_backend::config::{AppSettings, Environment};
use task_manager_backend::core::registry::ServiceLocator;
use task_manager_backend::db::Database;
use task_manager_backend::services::{DataInitializer, TokenService, UserService};

pub const ADMIN_EMAIL: &str = "hexlet@example.com";
pub const ADMIN_PASSWORD: &str = "qwerty";

/// 인메모리 SQLite, 테스트 설정, 초기 데이터가 준비된 레지스트리
pub async fn setup() -> Arc<ServiceLocator> {
    let database = Database::in_memory().await.unwrap();
    database.migrate().await.unwrap();

    let locator = Arc::new(ServiceLocator::new());
    locator.set(Arc::new(database));
    locator.set(Arc::new(AppSettings::for_environment(Environment::Test)));

    locator.get::<DataInitializer>().unwrap().run().await.unwrap();
    locator
}

/// 관리자 계정의 JWT
pub async fn admin_token(locator: &ServiceLocator) -> String {
    token_for(locator, ADMIN_EMAIL).await
}

pub async fn token_for(locator: &ServiceLocator, email: &str) -> String {
    let user = locator
        .get::<UserService>()
        .unwrap()
        .find_by_email(email)
        .await
        .unwrap()
        .expect("user exists");

    locator.get::<TokenService>().unwrap().issue_token(&user).unwrap()
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// 요청을 보내고 상태 코드와 JSON 본문을 돌려줍니다. 본문이 비어 있으면 `Value::Null`
///
/// 테스트 파일에서 `#[macro_use] mod common;`으로 가져옵니다.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let response = actix_web::test::call_service($app, $req.to_request()).await;
        let status = response.status().as_u16();
        let body = actix_web::test::read_body(response).await;
        (status, common::to_json(&body))
    }};
}

pub fn to_json(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

pub fn parse<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).unwrap()
}

//! Redis 캐시 클라이언트
//!
//! 값은 JSON 문자열로 저장합니다. `REDIS_URL`이 설정된 경우에만 `main`에서 생성되어
//! `ServiceLocator`에 등록되며, 리포지토리는 `try_get`으로 선택적으로 사용합니다.

use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};

use crate::core::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 연결 후 `PING`으로 서버 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url).map_err(redis_error)?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(redis_error)?;
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(redis_error)?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(redis_error)?;
        let value: Option<String> = conn.get(key).await.map_err(redis_error)?;

        value
            .map(|json| {
                serde_json::from_str(&json)
                    .map_err(|e| AppError::RedisError(format!("역직렬화 실패 ({}): {}", key, e)))
            })
            .transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> AppResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::RedisError(format!("직렬화 실패 ({}): {}", key, e)))?;

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(redis_error)?;
        conn.set_ex(key, json, seconds).await.map_err(redis_error)
    }

    pub async fn del_multiple(&self, keys: &[String]) -> AppResult<()> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(redis_error)?;
        conn.del(keys).await.map_err(redis_error)
    }
}

fn redis_error(e: redis::RedisError) -> AppError {
    AppError::RedisError(e.to_string())
}

//! # 사용자 리포지토리 구현
//!
//! `users` 테이블의 데이터 액세스를 담당합니다.
//! `REDIS_URL`이 설정되어 `RedisClient`가 등록된 경우 단건 조회 결과를 캐싱합니다.
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: 개별 사용자 `user:{id}`, 이메일 조회 `user:email:{email}`
//! - **TTL**: `AppSettings::cache_ttl_seconds` (기본 600초)
//! - **무효화**: 수정/삭제 시 id 키와 변경 전후 이메일 키를 모두 삭제
//!
//! 캐시 오류는 경고 로그만 남기고 요청을 실패시키지 않습니다.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::caching::redis::RedisClient;
use crate::config::AppSettings;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{register_repository, Component, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::today;
use crate::domain::entities::users::{NewUser, User};
use crate::repositories::db_error;

const USER_COLUMNS: &str = "id, email, first_name, last_name, password_hash, created_at, updated_at";

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository {
    db: Arc<Database>,
    redis: Option<Arc<RedisClient>>,
    cache_ttl: u64,
}

impl Component for UserRepository {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        let settings = locator.get::<AppSettings>()?;

        Ok(Self {
            db: locator.get()?,
            redis: locator.try_get(),
            cache_ttl: settings.cache_ttl_seconds,
        })
    }
}

register_repository!(UserRepository, "user_repository");

impl UserRepository {
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))
            .fetch_all(self.db.pool())
            .await
            .map_err(db_error)
    }

    /// id로 사용자 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let cache_key = Self::id_key(id);

        if let Some(cached) = self.cache_get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)?;

        if let Some(ref user) = user {
            self.cache_put(&cache_key, user).await;
        }

        Ok(user)
    }

    /// 이메일 주소로 사용자 조회 (캐시 우선)
    ///
    /// 로그인과 JWT 인증 주체 확인에 사용됩니다.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let cache_key = Self::email_key(email);

        if let Some(cached) = self.cache_get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
            .bind(email)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)?;

        if let Some(ref user) = user {
            self.cache_put(&cache_key, user).await;
        }

        Ok(user)
    }

    pub async fn create(&self, user: NewUser) -> AppResult<User> {
        let now = today();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, first_name, last_name, password_hash, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(&now)
        .bind(&now)
        .fetch_one(self.db.pool())
        .await
        .map_err(db_error)?;

        Ok(User {
            id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            password_hash: user.password_hash,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// 전체 필드를 덮어씁니다. 병합은 서비스 계층의 책임입니다.
    pub async fn update(&self, user: &User) -> AppResult<User> {
        let previous_email: Option<String> = sqlx::query_scalar("SELECT email FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)?;

        let previous_email = previous_email
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user.id)))?;

        let now = today();
        sqlx::query(
            "UPDATE users SET email = $1, first_name = $2, last_name = $3, password_hash = $4, updated_at = $5
             WHERE id = $6",
        )
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(&now)
        .bind(user.id)
        .execute(self.db.pool())
        .await
        .map_err(db_error)?;

        self.invalidate(user.id, &[previous_email.as_str(), user.email.as_str()])
            .await;

        Ok(User {
            updated_at: now,
            ..user.clone()
        })
    }

    /// 삭제된 행이 있으면 `true`
    pub async fn delete(&self, user: &User) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id)
            .execute(self.db.pool())
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        self.invalidate(user.id, &[user.email.as_str()]).await;
        Ok(true)
    }

    fn id_key(id: i64) -> String {
        format!("user:{}", id)
    }

    fn email_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    async fn cache_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let redis = self.redis.as_ref()?;

        match redis.get::<T>(key).await {
            Ok(value) => value,
            Err(e) => {
                log::warn!("⚠️ 캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn cache_put<T: Serialize>(&self, key: &str, value: &T) {
        if let Some(redis) = &self.redis {
            if let Err(e) = redis.set_with_expiry(key, value, self.cache_ttl).await {
                log::warn!("⚠️ 캐시 저장 실패 ({}): {}", key, e);
            }
        }
    }

    async fn invalidate(&self, id: i64, emails: &[&str]) {
        let Some(redis) = &self.redis else {
            return;
        };

        let mut keys = vec![Self::id_key(id)];
        keys.extend(emails.iter().map(|email| Self::email_key(email)));
        keys.dedup();

        if let Err(e) = redis.del_multiple(&keys).await {
            log::warn!("⚠️ 캐시 무효화 실패 (user {}): {}", id, e);
        }
    }
}

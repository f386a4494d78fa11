//! # 사용자 관리 서비스 구현
//!
//! 사용자 등록, 조회, 수정, 삭제와 로그인 시 비밀번호 검증을 담당합니다.
//!
//! ```text
//! UserService
//! ├── create/update   bcrypt 해싱, 이메일 중복 확인 (409)
//! ├── delete          담당 태스크가 있으면 거부 (400)
//! └── verify_password 사용자 없음과 비밀번호 불일치를 같은 메시지로 처리 (401)
//!          │
//!          ▼
//! UserRepository (SQL + 선택적 Redis 캐시)
//! ```
//!
//! bcrypt cost는 `AppSettings::bcrypt_cost`를 따릅니다 (개발/테스트 4, 운영 12).

use std::sync::Arc;

use bcrypt::{hash, verify};

use crate::config::AppSettings;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{register_service, Component, ServiceLocator};
use crate::domain::dto::users::{UserCreateRequest, UserResponse, UserUpdateRequest};
use crate::domain::entities::users::{NewUser, User};
use crate::repositories::{TaskRepository, UserRepository};
use crate::utils::nullable::merge;
use crate::utils::string_utils::normalize_email;

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

pub struct UserService {
    user_repo: Arc<UserRepository>,
    task_repo: Arc<TaskRepository>,
    bcrypt_cost: u32,
}

impl Component for UserService {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        let settings = locator.get::<AppSettings>()?;

        Ok(Self {
            user_repo: locator.get()?,
            task_repo: locator.get()?,
            bcrypt_cost: settings.bcrypt_cost,
        })
    }
}

register_service!(UserService, "user_service");

impl UserService {
    pub async fn find_all(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<UserResponse> {
        self.load(id).await.map(UserResponse::from)
    }

    pub async fn create(&self, request: UserCreateRequest) -> AppResult<UserResponse> {
        let email = normalize_email(&request.email);
        self.ensure_email_available(&email, None).await?;

        let password_hash = self.hash_password(&request.password)?;

        let user = self
            .user_repo
            .create(NewUser {
                email,
                first_name: request.first_name,
                last_name: request.last_name,
                password_hash,
            })
            .await?;

        log::info!("👤 사용자 생성: {} (id {})", user.email, user.id);
        Ok(UserResponse::from(user))
    }

    /// 요청에 포함된 필드만 변경합니다. 비밀번호가 있으면 다시 해싱합니다.
    pub async fn update(&self, id: i64, request: UserUpdateRequest) -> AppResult<UserResponse> {
        let current = self.load(id).await?;

        let email = match request.email {
            Some(email) => {
                let email = normalize_email(&email);
                self.ensure_email_available(&email, Some(id)).await?;
                email
            }
            None => current.email.clone(),
        };

        let password_hash = match request.password {
            Some(password) => self.hash_password(&password)?,
            None => current.password_hash.clone(),
        };

        let user = User {
            email,
            first_name: merge(current.first_name.clone(), request.first_name.map(Some)),
            last_name: merge(current.last_name.clone(), request.last_name.map(Some)),
            password_hash,
            ..current
        };

        let updated = self.user_repo.update(&user).await?;
        Ok(UserResponse::from(updated))
    }

    /// 담당 중인 태스크가 있으면 `ResourceInUse`
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let user = self.load(id).await?;

        if self.task_repo.exists_by_assignee(id).await? {
            return Err(AppError::ResourceInUse(format!(
                "User with id {} is assigned to tasks and cannot be deleted",
                id
            )));
        }

        if !self.user_repo.delete(&user).await? {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        log::info!("🗑️ 사용자 삭제: {} (id {})", user.email, id);
        Ok(())
    }

    /// 로그인 자격 증명 확인
    ///
    /// 사용자 없음과 비밀번호 불일치를 구분하지 않습니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .user_repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let is_valid = verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::warn!("🔒 로그인 실패: {}", user.email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        Ok(user)
    }

    /// JWT 주체(이메일)가 여전히 존재하는 사용자인지 확인
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_email(&normalize_email(email)).await
    }

    async fn load(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    async fn ensure_email_available(&self, email: &str, owner_id: Option<i64>) -> AppResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner_id => Err(AppError::ConflictError(
                format!("User with email {} already exists", email),
            )),
            _ => Ok(()),
        }
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }
}

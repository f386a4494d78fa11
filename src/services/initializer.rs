//! 초기 데이터 적재
//!
//! 애플리케이션 시작 시 한 번 실행됩니다. 이미 존재하는 데이터는 건너뛰므로
//! 여러 번 실행해도 결과가 같습니다.

use std::sync::Arc;

use bcrypt::hash;

use crate::config::AppSettings;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{register_service, Component, ServiceLocator};
use crate::domain::entities::task_statuses::NewTaskStatus;
use crate::domain::entities::users::NewUser;
use crate::repositories::{LabelRepository, TaskStatusRepository, UserRepository};
use crate::utils::string_utils::normalize_email;

/// 기본 태스크 상태 (이름, 슬러그)
pub const DEFAULT_STATUSES: [(&str, &str); 5] = [
    ("Draft", "draft"),
    ("ToReview", "to_review"),
    ("ToBeFixed", "to_be_fixed"),
    ("ToPublish", "to_publish"),
    ("Published", "published"),
];

pub const DEFAULT_LABELS: [&str; 2] = ["feature", "bug"];

pub struct DataInitializer {
    settings: Arc<AppSettings>,
    user_repo: Arc<UserRepository>,
    status_repo: Arc<TaskStatusRepository>,
    label_repo: Arc<LabelRepository>,
}

impl Component for DataInitializer {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            settings: locator.get()?,
            user_repo: locator.get()?,
            status_repo: locator.get()?,
            label_repo: locator.get()?,
        })
    }
}

register_service!(DataInitializer, "data_initializer");

impl DataInitializer {
    pub async fn run(&self) -> AppResult<()> {
        self.seed_admin().await?;
        self.seed_statuses().await?;
        self.seed_labels().await?;

        log::info!("🌱 초기 데이터 준비 완료");
        Ok(())
    }

    async fn seed_admin(&self) -> AppResult<()> {
        let admin = &self.settings.admin;
        let email = normalize_email(&admin.email);

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Ok(());
        }

        let password_hash = hash(&admin.password, self.settings.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        self.user_repo
            .create(NewUser {
                email: email.clone(),
                first_name: Some(admin.first_name.clone()),
                last_name: Some(admin.last_name.clone()),
                password_hash,
            })
            .await?;

        log::info!("👤 관리자 계정 생성: {}", email);
        Ok(())
    }

    async fn seed_statuses(&self) -> AppResult<()> {
        for (name, slug) in DEFAULT_STATUSES {
            if self.status_repo.find_by_slug(slug).await?.is_some() {
                continue;
            }

            self.status_repo
                .create(NewTaskStatus {
                    name: name.to_string(),
                    slug: slug.to_string(),
                })
                .await?;
            log::debug!("   └─ 상태 생성: {}", slug);
        }

        Ok(())
    }

    async fn seed_labels(&self) -> AppResult<()> {
        for name in DEFAULT_LABELS {
            if self.label_repo.find_by_name(name).await?.is_none() {
                self.label_repo.create(name.to_string()).await?;
                log::debug!("   └─ 라벨 생성: {}", name);
            }
        }

        Ok(())
    }
}

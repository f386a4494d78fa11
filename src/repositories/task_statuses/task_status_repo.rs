use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::core::registry::{register_repository, Component, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::task_statuses::{NewTaskStatus, TaskStatus};
use crate::domain::entities::today;
use crate::repositories::db_error;

const SELECT_STATUS: &str = "SELECT id, name, slug, created_at FROM task_statuses";

/// `task_statuses` 테이블 리포지토리
pub struct TaskStatusRepository {
    db: Arc<Database>,
}

impl Component for TaskStatusRepository {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self { db: locator.get()? })
    }
}

register_repository!(TaskStatusRepository, "task_status_repository");

impl TaskStatusRepository {
    pub async fn find_all(&self) -> AppResult<Vec<TaskStatus>> {
        sqlx::query_as::<_, TaskStatus>(&format!("{} ORDER BY id", SELECT_STATUS))
            .fetch_all(self.db.pool())
            .await
            .map_err(db_error)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<TaskStatus>> {
        sqlx::query_as::<_, TaskStatus>(&format!("{} WHERE id = $1", SELECT_STATUS))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)
    }

    /// 태스크는 슬러그로 상태를 참조합니다.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<TaskStatus>> {
        sqlx::query_as::<_, TaskStatus>(&format!("{} WHERE slug = $1", SELECT_STATUS))
            .bind(slug)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<TaskStatus>> {
        sqlx::query_as::<_, TaskStatus>(&format!("{} WHERE name = $1", SELECT_STATUS))
            .bind(name)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)
    }

    pub async fn create(&self, status: NewTaskStatus) -> AppResult<TaskStatus> {
        let now = today();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO task_statuses (name, slug, created_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&status.name)
        .bind(&status.slug)
        .bind(&now)
        .fetch_one(self.db.pool())
        .await
        .map_err(db_error)?;

        Ok(TaskStatus {
            id,
            name: status.name,
            slug: status.slug,
            created_at: now,
        })
    }

    pub async fn update(&self, status: &TaskStatus) -> AppResult<()> {
        sqlx::query("UPDATE task_statuses SET name = $1, slug = $2 WHERE id = $3")
            .bind(&status.name)
            .bind(&status.slug)
            .bind(status.id)
            .execute(self.db.pool())
            .await
            .map(|_| ())
            .map_err(db_error)
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM task_statuses WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

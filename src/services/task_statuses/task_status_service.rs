use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{register_service, Component, ServiceLocator};
use crate::domain::dto::task_statuses::{TaskStatusCreateRequest, TaskStatusResponse, TaskStatusUpdateRequest};
use crate::domain::entities::task_statuses::{NewTaskStatus, TaskStatus};
use crate::repositories::{TaskRepository, TaskStatusRepository};
use crate::utils::nullable::merge;

/// 태스크 상태 관리 서비스
///
/// 이름과 슬러그는 각각 유일해야 하며(409), 태스크가 참조 중인 상태는 삭제할 수 없습니다(400).
pub struct TaskStatusService {
    status_repo: Arc<TaskStatusRepository>,
    task_repo: Arc<TaskRepository>,
}

impl Component for TaskStatusService {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            status_repo: locator.get()?,
            task_repo: locator.get()?,
        })
    }
}

register_service!(TaskStatusService, "task_status_service");

impl TaskStatusService {
    pub async fn find_all(&self) -> AppResult<Vec<TaskStatusResponse>> {
        let statuses = self.status_repo.find_all().await?;
        Ok(statuses.into_iter().map(TaskStatusResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<TaskStatusResponse> {
        self.load(id).await.map(TaskStatusResponse::from)
    }

    pub async fn create(&self, request: TaskStatusCreateRequest) -> AppResult<TaskStatusResponse> {
        let name = request.name.trim().to_string();
        let slug = request.slug.trim().to_string();
        self.ensure_unique(&name, &slug, None).await?;

        let status = self.status_repo.create(NewTaskStatus { name, slug }).await?;

        log::info!("🏷️ 태스크 상태 생성: {} ({})", status.name, status.slug);
        Ok(TaskStatusResponse::from(status))
    }

    pub async fn update(&self, id: i64, request: TaskStatusUpdateRequest) -> AppResult<TaskStatusResponse> {
        let current = self.load(id).await?;

        let status = TaskStatus {
            name: merge(current.name.clone(), request.name.map(|n| n.trim().to_string())),
            slug: merge(current.slug.clone(), request.slug.map(|s| s.trim().to_string())),
            ..current
        };
        self.ensure_unique(&status.name, &status.slug, Some(id)).await?;

        self.status_repo.update(&status).await?;
        Ok(TaskStatusResponse::from(status))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let status = self.load(id).await?;

        if self.task_repo.exists_by_status(id).await? {
            return Err(AppError::ResourceInUse(format!(
                "Task status '{}' is used by tasks and cannot be deleted",
                status.slug
            )));
        }

        if !self.status_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Task status with id {} not found", id)));
        }
        Ok(())
    }

    /// 슬러그로 상태를 찾습니다. 태스크 생성/수정 시 사용합니다.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<TaskStatus> {
        self.status_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task status with slug '{}' not found", slug)))
    }

    async fn load(&self, id: i64) -> AppResult<TaskStatus> {
        self.status_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task status with id {} not found", id)))
    }

    async fn ensure_unique(&self, name: &str, slug: &str, owner_id: Option<i64>) -> AppResult<()> {
        if let Some(existing) = self.status_repo.find_by_name(name).await? {
            if Some(existing.id) != owner_id {
                return Err(AppError::ConflictError(format!("Task status with name '{}' already exists", name)));
            }
        }

        if let Some(existing) = self.status_repo.find_by_slug(slug).await? {
            if Some(existing.id) != owner_id {
                return Err(AppError::ConflictError(format!("Task status with slug '{}' already exists", slug)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn service() -> TaskStatusService {
        let database = Database::in_memory().await.unwrap();
        database.migrate().await.unwrap();

        let locator = ServiceLocator::new();
        locator.set(Arc::new(database));
        TaskStatusService::build(&locator).unwrap()
    }

    fn request(name: &str, slug: &str) -> TaskStatusCreateRequest {
        TaskStatusCreateRequest {
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_duplicate_name_or_slug_is_conflict() {
        let service = service().await;
        service.create(request("Draft", "draft")).await.unwrap();

        assert!(matches!(
            service.create(request("Draft", "other")).await,
            Err(AppError::ConflictError(_))
        ));
        assert!(matches!(
            service.create(request("Other", "draft")).await,
            Err(AppError::ConflictError(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_keeps_own_name() {
        let service = service().await;
        let created = service.create(request("Draft", "draft")).await.unwrap();

        let updated = service
            .update(
                created.id,
                TaskStatusUpdateRequest {
                    name: Some("Draft".to_string()),
                    slug: Some("new_draft".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Draft");
        assert_eq!(updated.slug, "new_draft");
        assert_eq!(service.find_by_slug("new_draft").await.unwrap().id, created.id);
    }

    #[actix_web::test]
    async fn test_delete_missing_is_not_found() {
        let service = service().await;

        assert!(matches!(service.delete(7).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.find_by_slug("nope").await, Err(AppError::NotFound(_))));
    }
}

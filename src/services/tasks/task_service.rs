//! 태스크 관리 서비스
//!
//! 요청의 참조 값(상태 슬러그, 담당자 id, 라벨 id)을 검증한 뒤 [`TaskDraft`]로
//! 만들어 리포지토리에 넘깁니다. 존재하지 않는 참조는 404 입니다.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{register_service, Component, ServiceLocator};
use crate::domain::dto::tasks::{TaskCreateRequest, TaskResponse, TaskUpdateRequest};
use crate::domain::entities::tasks::{Task, TaskDraft, TaskQuery};
use crate::repositories::{TaskRepository, UserRepository};
use crate::services::{LabelService, TaskStatusService};
use crate::utils::nullable::merge;
use crate::utils::string_utils::clean_optional_string;

pub struct TaskService {
    task_repo: Arc<TaskRepository>,
    user_repo: Arc<UserRepository>,
    status_service: Arc<TaskStatusService>,
    label_service: Arc<LabelService>,
}

impl Component for TaskService {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            task_repo: locator.get()?,
            user_repo: locator.get()?,
            status_service: locator.get()?,
            label_service: locator.get()?,
        })
    }
}

register_service!(TaskService, "task_service");

impl TaskService {
    pub async fn find_all(&self, query: TaskQuery) -> AppResult<Vec<TaskResponse>> {
        let tasks = self.task_repo.find_all(&query).await?;
        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<TaskResponse> {
        self.load(id).await.map(TaskResponse::from)
    }

    pub async fn create(&self, request: TaskCreateRequest) -> AppResult<TaskResponse> {
        let status = self.status_service.find_by_slug(request.status.trim()).await?;
        self.ensure_assignee_exists(request.assignee_id).await?;

        let label_ids = request.task_label_ids.unwrap_or_default();
        self.label_service.ensure_all_exist(&label_ids).await?;

        let draft = TaskDraft {
            index: request.index,
            name: request.title.trim().to_string(),
            description: request.content,
            task_status_id: status.id,
            assignee_id: request.assignee_id,
            label_ids,
        };

        let task = self.task_repo.create(&draft).await?;
        log::info!("📝 태스크 생성: '{}' (id {}, status {})", task.name, task.id, task.status_slug);
        Ok(TaskResponse::from(task))
    }

    /// 부분 수정. 필드가 없으면 유지하고, nullable 필드의 `null`은 값을 비웁니다.
    pub async fn update(&self, id: i64, request: TaskUpdateRequest) -> AppResult<TaskResponse> {
        let current = self.load(id).await?;
        let mut draft = TaskDraft::from(&current);

        match request.title {
            Some(Some(title)) => draft.name = title.trim().to_string(),
            Some(None) => return Err(AppError::ValidationError("title: 제목은 null일 수 없습니다".to_string())),
            None => {}
        }

        match request.status {
            Some(Some(slug)) => draft.task_status_id = self.status_service.find_by_slug(slug.trim()).await?.id,
            Some(None) => return Err(AppError::ValidationError("status: 상태는 null일 수 없습니다".to_string())),
            None => {}
        }

        if let Some(assignee_id) = request.assignee_id {
            self.ensure_assignee_exists(assignee_id).await?;
            draft.assignee_id = assignee_id;
        }

        if let Some(label_ids) = request.task_label_ids {
            let label_ids: BTreeSet<i64> = label_ids.unwrap_or_default();
            self.label_service.ensure_all_exist(&label_ids).await?;
            draft.label_ids = label_ids;
        }

        draft.index = merge(draft.index, request.index);
        draft.description = merge(draft.description, request.content.map(clean_optional_string));

        let task = self.task_repo.update(id, &draft).await?;
        Ok(TaskResponse::from(task))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.task_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Task with id {} not found", id)));
        }

        log::info!("🗑️ 태스크 삭제: id {}", id);
        Ok(())
    }

    async fn load(&self, id: i64) -> AppResult<Task> {
        self.task_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task with id {} not found", id)))
    }

    async fn ensure_assignee_exists(&self, assignee_id: Option<i64>) -> AppResult<()> {
        let Some(user_id) = assignee_id else {
            return Ok(());
        };

        match self.user_repo.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("User with id {} not found", user_id))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppSettings, Environment};
    use crate::db::Database;
    use crate::domain::dto::labels::LabelCreateRequest;
    use crate::domain::dto::task_statuses::TaskStatusCreateRequest;

    struct Fixture {
        tasks: Arc<TaskService>,
        bug_id: i64,
    }

    async fn fixture() -> Fixture {
        let database = Database::in_memory().await.unwrap();
        database.migrate().await.unwrap();

        let locator = ServiceLocator::new();
        locator.set(Arc::new(database));
        locator.set(Arc::new(AppSettings::for_environment(Environment::Test)));

        let statuses = locator.get::<TaskStatusService>().unwrap();
        for slug in ["draft", "published"] {
            statuses
                .create(TaskStatusCreateRequest { name: slug.to_uppercase(), slug: slug.to_string() })
                .await
                .unwrap();
        }
        let bug = locator
            .get::<LabelService>()
            .unwrap()
            .create(LabelCreateRequest { name: "bug".to_string() })
            .await
            .unwrap();

        Fixture {
            tasks: locator.get::<TaskService>().unwrap(),
            bug_id: bug.id,
        }
    }

    fn create_request(title: &str, status: &str) -> TaskCreateRequest {
        TaskCreateRequest {
            index: Some(1),
            assignee_id: None,
            title: title.to_string(),
            content: Some("details".to_string()),
            status: status.to_string(),
            task_label_ids: None,
        }
    }

    #[actix_web::test]
    async fn test_create_resolves_status_slug() {
        let f = fixture().await;

        let task = f.tasks.create(create_request("Ship", "draft")).await.unwrap();

        assert_eq!(task.status, "draft");
        assert_eq!(task.title, "Ship");
        assert!(task.task_label_ids.is_empty());
    }

    #[actix_web::test]
    async fn test_unknown_references_are_not_found() {
        let f = fixture().await;

        let unknown_status = f.tasks.create(create_request("Ship", "archived")).await;
        let unknown_assignee = f
            .tasks
            .create(TaskCreateRequest { assignee_id: Some(404), ..create_request("Ship", "draft") })
            .await;
        let unknown_label = f
            .tasks
            .create(TaskCreateRequest {
                task_label_ids: Some(BTreeSet::from([f.bug_id, 404])),
                ..create_request("Ship", "draft")
            })
            .await;

        assert!(matches!(unknown_status, Err(AppError::NotFound(_))));
        assert!(matches!(unknown_assignee, Err(AppError::NotFound(_))));
        assert!(matches!(unknown_label, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_distinguishes_missing_and_null() {
        let f = fixture().await;
        let task = f
            .tasks
            .create(TaskCreateRequest {
                task_label_ids: Some(BTreeSet::from([f.bug_id])),
                ..create_request("Ship", "draft")
            })
            .await
            .unwrap();

        let updated = f
            .tasks
            .update(
                task.id,
                TaskUpdateRequest {
                    content: Some(None),
                    status: Some(Some("published".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Ship");
        assert_eq!(updated.index, Some(1));
        assert_eq!(updated.content, None);
        assert_eq!(updated.status, "published");
        assert_eq!(updated.task_label_ids, BTreeSet::from([f.bug_id]));

        let cleared = f
            .tasks
            .update(task.id, TaskUpdateRequest { task_label_ids: Some(None), index: Some(None), ..Default::default() })
            .await
            .unwrap();
        assert!(cleared.task_label_ids.is_empty());
        assert_eq!(cleared.index, None);
    }

    #[actix_web::test]
    async fn test_delete_missing_is_not_found() {
        let f = fixture().await;

        assert!(matches!(f.tasks.delete(1).await, Err(AppError::NotFound(_))));
    }
}

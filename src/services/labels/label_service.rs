use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{register_service, Component, ServiceLocator};
use crate::domain::dto::labels::{LabelCreateRequest, LabelResponse, LabelUpdateRequest};
use crate::domain::entities::labels::Label;
use crate::repositories::{LabelRepository, TaskRepository};

/// 라벨 관리 서비스
pub struct LabelService {
    label_repo: Arc<LabelRepository>,
    task_repo: Arc<TaskRepository>,
}

impl Component for LabelService {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self {
            label_repo: locator.get()?,
            task_repo: locator.get()?,
        })
    }
}

register_service!(LabelService, "label_service");

impl LabelService {
    pub async fn find_all(&self) -> AppResult<Vec<LabelResponse>> {
        let labels = self.label_repo.find_all().await?;
        Ok(labels.into_iter().map(LabelResponse::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<LabelResponse> {
        self.load(id).await.map(LabelResponse::from)
    }

    pub async fn create(&self, request: LabelCreateRequest) -> AppResult<LabelResponse> {
        self.ensure_unique(&request.name, None).await?;

        let label = self.label_repo.create(request.name).await?;
        Ok(LabelResponse::from(label))
    }

    pub async fn update(&self, id: i64, request: LabelUpdateRequest) -> AppResult<LabelResponse> {
        let current = self.load(id).await?;

        let Some(name) = request.name else {
            return Ok(LabelResponse::from(current));
        };
        self.ensure_unique(&name, Some(id)).await?;

        let updated = self.label_repo.update(&Label { name, ..current }).await?;
        Ok(LabelResponse::from(updated))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let label = self.load(id).await?;

        if self.task_repo.exists_by_label(id).await? {
            return Err(AppError::ResourceInUse(format!(
                "Label '{}' is attached to tasks and cannot be deleted",
                label.name
            )));
        }

        if !self.label_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Label with id {} not found", id)));
        }
        Ok(())
    }

    /// 모든 라벨 id가 존재하는지 확인합니다. 하나라도 없으면 `NotFound`
    pub async fn ensure_all_exist(&self, ids: &BTreeSet<i64>) -> AppResult<()> {
        let found = self.label_repo.count_existing(ids).await?;

        if found != ids.len() {
            return Err(AppError::NotFound(format!("Some labels not found: {:?}", ids)));
        }
        Ok(())
    }

    async fn load(&self, id: i64) -> AppResult<Label> {
        self.label_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Label with id {} not found", id)))
    }

    async fn ensure_unique(&self, name: &str, owner_id: Option<i64>) -> AppResult<()> {
        match self.label_repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != owner_id => Err(AppError::ConflictError(format!(
                "Label with name '{}' already exists",
                name
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn service() -> LabelService {
        let database = Database::in_memory().await.unwrap();
        database.migrate().await.unwrap();

        let locator = ServiceLocator::new();
        locator.set(Arc::new(database));
        LabelService::build(&locator).unwrap()
    }

    #[actix_web::test]
    async fn test_create_duplicate_is_conflict() {
        let service = service().await;
        service.create(LabelCreateRequest { name: "feature".to_string() }).await.unwrap();

        assert!(matches!(
            service.create(LabelCreateRequest { name: "feature".to_string() }).await,
            Err(AppError::ConflictError(_))
        ));
    }

    #[actix_web::test]
    async fn test_ensure_all_exist() {
        let service = service().await;
        let bug = service.create(LabelCreateRequest { name: "bug".to_string() }).await.unwrap();

        assert!(service.ensure_all_exist(&BTreeSet::from([bug.id])).await.is_ok());
        assert!(service.ensure_all_exist(&BTreeSet::new()).await.is_ok());
        assert!(matches!(
            service.ensure_all_exist(&BTreeSet::from([bug.id, 99])).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_without_name_is_noop() {
        let service = service().await;
        let bug = service.create(LabelCreateRequest { name: "bug".to_string() }).await.unwrap();

        let same = service.update(bug.id, LabelUpdateRequest::default()).await.unwrap();
        assert_eq!(same.name, "bug");
    }
}

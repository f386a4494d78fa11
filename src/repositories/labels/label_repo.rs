use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::core::registry::{register_repository, Component, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::labels::Label;
use crate::domain::entities::today;
use crate::repositories::{db_error, placeholders};

const SELECT_LABEL: &str = "SELECT id, name, created_at, updated_at FROM labels";

/// `labels` 테이블 리포지토리
pub struct LabelRepository {
    db: Arc<Database>,
}

impl Component for LabelRepository {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self { db: locator.get()? })
    }
}

register_repository!(LabelRepository, "label_repository");

impl LabelRepository {
    pub async fn find_all(&self) -> AppResult<Vec<Label>> {
        sqlx::query_as::<_, Label>(&format!("{} ORDER BY id", SELECT_LABEL))
            .fetch_all(self.db.pool())
            .await
            .map_err(db_error)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Label>> {
        sqlx::query_as::<_, Label>(&format!("{} WHERE id = $1", SELECT_LABEL))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Label>> {
        sqlx::query_as::<_, Label>(&format!("{} WHERE name = $1", SELECT_LABEL))
            .bind(name)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)
    }

    /// 주어진 id 중 실제로 존재하는 라벨 수
    pub async fn count_existing(&self, ids: &BTreeSet<i64>) -> AppResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let sql = format!(
            "SELECT COUNT(*) FROM labels WHERE id IN ({})",
            placeholders(1, ids.len())
        );

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for id in ids {
            query = query.bind(*id);
        }

        let count = query.fetch_one(self.db.pool()).await.map_err(db_error)?;
        Ok(count as usize)
    }

    pub async fn create(&self, name: String) -> AppResult<Label> {
        let now = today();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO labels (name, created_at, updated_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&name)
        .bind(&now)
        .bind(&now)
        .fetch_one(self.db.pool())
        .await
        .map_err(db_error)?;

        Ok(Label {
            id,
            name,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub async fn update(&self, label: &Label) -> AppResult<Label> {
        let now = today();

        sqlx::query("UPDATE labels SET name = $1, updated_at = $2 WHERE id = $3")
            .bind(&label.name)
            .bind(&now)
            .bind(label.id)
            .execute(self.db.pool())
            .await
            .map_err(db_error)?;

        Ok(Label {
            updated_at: now,
            ..label.clone()
        })
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM labels WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

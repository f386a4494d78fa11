//! 태스크 리포지토리
//!
//! 태스크 행과 `task_labels` 조인 테이블을 함께 다룹니다. 라벨 집합을 바꾸는
//! 쓰기 작업은 하나의 트랜잭션으로 실행됩니다.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use sqlx::{Any, Transaction};

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{register_repository, Component, ServiceLocator};
use crate::db::Database;
use crate::domain::entities::tasks::{Task, TaskDraft, TaskQuery};
use crate::domain::entities::today;
use crate::repositories::{db_error, placeholders};

const SELECT_TASK: &str = "SELECT t.id, t.task_index, t.name, t.description, t.task_status_id,
        s.slug AS status_slug, t.assignee_id, t.created_at, t.updated_at
    FROM tasks t
    JOIN task_statuses s ON s.id = t.task_status_id";

// 값이 NULL이면 해당 조건을 건너뜀. PostgreSQL 타입 추론을 위해 CAST 명시
// $1은 `title_pattern`으로 이스케이프된 소문자 LIKE 패턴
const FILTER_CLAUSE: &str = "
    WHERE (CAST($1 AS TEXT) IS NULL OR LOWER(t.name) LIKE CAST($1 AS TEXT) ESCAPE '\\')
      AND (CAST($2 AS BIGINT) IS NULL OR t.assignee_id = CAST($2 AS BIGINT))
      AND (CAST($3 AS TEXT) IS NULL OR s.slug = CAST($3 AS TEXT))
      AND (CAST($4 AS BIGINT) IS NULL OR EXISTS (
            SELECT 1 FROM task_labels tl WHERE tl.task_id = t.id AND tl.label_id = CAST($4 AS BIGINT)))
    ORDER BY t.id";

pub struct TaskRepository {
    db: Arc<Database>,
}

impl Component for TaskRepository {
    fn build(locator: &ServiceLocator) -> AppResult<Self> {
        Ok(Self { db: locator.get()? })
    }
}

register_repository!(TaskRepository, "task_repository");

impl TaskRepository {
    /// 필터 조건을 모두 만족하는 태스크 (id 오름차순)
    pub async fn find_all(&self, query: &TaskQuery) -> AppResult<Vec<Task>> {
        let mut tasks = sqlx::query_as::<_, Task>(&format!("{}{}", SELECT_TASK, FILTER_CLAUSE))
            .bind(query.title_cont.as_deref().map(title_pattern))
            .bind(query.assignee_id)
            .bind(query.status.as_deref())
            .bind(query.label_id)
            .fetch_all(self.db.pool())
            .await
            .map_err(db_error)?;

        let task_ids: Vec<i64> = tasks.iter().map(|task| task.id).collect();
        let mut label_ids = self.load_label_ids_for(&task_ids).await?;

        for task in tasks.iter_mut() {
            task.label_ids = label_ids.remove(&task.id).unwrap_or_default();
        }

        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(&format!("{} WHERE t.id = $1", SELECT_TASK))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_error)?;

        match task {
            Some(mut task) => {
                task.label_ids = self.load_label_ids(task.id).await?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    pub async fn create(&self, draft: &TaskDraft) -> AppResult<Task> {
        let now = today();
        let mut tx = self.db.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tasks (task_index, name, description, task_status_id, assignee_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(draft.index)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.task_status_id)
        .bind(draft.assignee_id)
        .bind(&now)
        .bind(&now)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_error)?;

        Self::insert_labels(&mut tx, id, &draft.label_ids).await?;
        tx.commit().await.map_err(db_error)?;

        log::debug!("📝 Task {} 생성 (labels: {:?})", id, draft.label_ids);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("생성된 Task {}를 찾을 수 없습니다", id)))
    }

    /// 필드와 라벨 집합을 통째로 교체합니다.
    pub async fn update(&self, id: i64, draft: &TaskDraft) -> AppResult<Task> {
        let mut tx = self.db.begin().await?;

        let result = sqlx::query(
            "UPDATE tasks SET task_index = $1, name = $2, description = $3, task_status_id = $4,
                assignee_id = $5, updated_at = $6
             WHERE id = $7",
        )
        .bind(draft.index)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.task_status_id)
        .bind(draft.assignee_id)
        .bind(today())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task with id {} not found", id)));
        }

        sqlx::query("DELETE FROM task_labels WHERE task_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;
        Self::insert_labels(&mut tx, id, &draft.label_ids).await?;

        tx.commit().await.map_err(db_error)?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task with id {} not found", id)))
    }

    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM task_labels WHERE task_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists_by_status(&self, task_status_id: i64) -> AppResult<bool> {
        self.exists("SELECT COUNT(*) FROM tasks WHERE task_status_id = $1", task_status_id)
            .await
    }

    pub async fn exists_by_label(&self, label_id: i64) -> AppResult<bool> {
        self.exists("SELECT COUNT(*) FROM task_labels WHERE label_id = $1", label_id)
            .await
    }

    pub async fn exists_by_assignee(&self, user_id: i64) -> AppResult<bool> {
        self.exists("SELECT COUNT(*) FROM tasks WHERE assignee_id = $1", user_id)
            .await
    }

    async fn exists(&self, sql: &'static str, id: i64) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_one(self.db.pool())
            .await
            .map_err(db_error)?;

        Ok(count > 0)
    }

    async fn load_label_ids(&self, task_id: i64) -> AppResult<BTreeSet<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT label_id FROM task_labels WHERE task_id = $1")
            .bind(task_id)
            .fetch_all(self.db.pool())
            .await
            .map_err(db_error)?;

        Ok(ids.into_iter().collect())
    }

    /// 여러 태스크의 라벨 id를 한 번의 쿼리로 읽습니다.
    async fn load_label_ids_for(&self, task_ids: &[i64]) -> AppResult<HashMap<i64, BTreeSet<i64>>> {
        let mut grouped: HashMap<i64, BTreeSet<i64>> = HashMap::new();
        if task_ids.is_empty() {
            return Ok(grouped);
        }

        let sql = format!(
            "SELECT task_id, label_id FROM task_labels WHERE task_id IN ({})",
            placeholders(1, task_ids.len())
        );

        let mut query = sqlx::query_as::<_, (i64, i64)>(&sql);
        for id in task_ids {
            query = query.bind(*id);
        }

        let rows = query.fetch_all(self.db.pool()).await.map_err(db_error)?;
        for (task_id, label_id) in rows {
            grouped.entry(task_id).or_default().insert(label_id);
        }

        Ok(grouped)
    }

    async fn insert_labels(
        tx: &mut Transaction<'static, Any>,
        task_id: i64,
        label_ids: &BTreeSet<i64>,
    ) -> AppResult<()> {
        for label_id in label_ids {
            sqlx::query("INSERT INTO task_labels (task_id, label_id) VALUES ($1, $2)")
                .bind(task_id)
                .bind(*label_id)
                .execute(&mut **tx)
                .await
                .map_err(db_error)?;
        }

        Ok(())
    }
}

/// 부분 일치용 `LIKE` 패턴. `\\`, `%`, `_`는 문자 그대로 비교합니다.
fn title_pattern(title: &str) -> String {
    let mut pattern = String::with_capacity(title.len() + 2);
    pattern.push('%');
    for c in title.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

use serde::{Deserialize, Serialize};

/// `task_statuses` 테이블 행. 태스크는 `slug`로 상태를 참조합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TaskStatus {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct NewTaskStatus {
    pub name: String,
    pub slug: String,
}

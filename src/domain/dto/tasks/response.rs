use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::tasks::Task;

/// 태스크 응답
///
/// 엔티티의 `name`/`description`은 `title`/`content`로, 상태는 슬러그로 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub index: Option<i64>,
    #[serde(rename = "assignee_id")]
    pub assignee_id: Option<i64>,
    pub title: String,
    pub content: Option<String>,
    pub status: String,
    #[schema(value_type = Vec<i64>)]
    pub task_label_ids: BTreeSet<i64>,
    pub created_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            index: task.index,
            assignee_id: task.assignee_id,
            title: task.name,
            content: task.description,
            status: task.status_slug,
            task_label_ids: task.label_ids,
            created_at: task.created_at,
        }
    }
}

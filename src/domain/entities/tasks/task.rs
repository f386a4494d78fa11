//! 태스크 엔티티

use std::collections::BTreeSet;

/// `tasks` 테이블 행과 연관 데이터
///
/// `status_slug`는 `task_statuses`와의 조인으로, `label_ids`는 `task_labels`에서
/// 별도로 채워집니다.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    #[sqlx(rename = "task_index")]
    pub index: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub task_status_id: i64,
    pub status_slug: String,
    pub assignee_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    #[sqlx(skip)]
    pub label_ids: BTreeSet<i64>,
}

/// 저장할 태스크 내용 (생성과 수정에 공통 사용)
///
/// 참조 값(상태, 담당자, 라벨)은 서비스 계층에서 검증된 id 입니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub index: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub task_status_id: i64,
    pub assignee_id: Option<i64>,
    pub label_ids: BTreeSet<i64>,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            index: task.index,
            name: task.name.clone(),
            description: task.description.clone(),
            task_status_id: task.task_status_id,
            assignee_id: task.assignee_id,
            label_ids: task.label_ids.clone(),
        }
    }
}

/// 태스크 목록 필터 (모든 조건은 AND)
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// 제목 부분 일치 (대소문자 무시)
    pub title_cont: Option<String>,
    pub assignee_id: Option<i64>,
    /// 상태 슬러그
    pub status: Option<String>,
    pub label_id: Option<i64>,
}

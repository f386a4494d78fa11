//! 테이블 정의
//!
//! 한 벌의 DDL 템플릿을 백엔드별 기본키 선언으로 치환해 사용합니다.
//! 모든 문장은 `IF NOT EXISTS`로 작성되어 반복 실행해도 안전합니다.

use crate::db::Backend;

const ID_PLACEHOLDER: &str = "{id}";

const TEMPLATE: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id {id},
        email TEXT NOT NULL UNIQUE,
        first_name TEXT,
        last_name TEXT,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS task_statuses (
        id {id},
        name TEXT NOT NULL UNIQUE,
        slug TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS labels (
        id {id},
        name VARCHAR(1000) NOT NULL UNIQUE,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id {id},
        task_index BIGINT,
        name TEXT NOT NULL,
        description TEXT,
        task_status_id BIGINT NOT NULL REFERENCES task_statuses (id),
        assignee_id BIGINT REFERENCES users (id),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS task_labels (
        task_id BIGINT NOT NULL REFERENCES tasks (id) ON DELETE CASCADE,
        label_id BIGINT NOT NULL REFERENCES labels (id),
        PRIMARY KEY (task_id, label_id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks (task_status_id)",
    "CREATE INDEX IF NOT EXISTS idx_tasks_assignee ON tasks (assignee_id)",
    "CREATE INDEX IF NOT EXISTS idx_task_labels_label ON task_labels (label_id)",
];

/// 백엔드에 맞게 치환된 DDL 문장 목록
pub fn statements(backend: Backend) -> Vec<String> {
    let id_column = match backend {
        Backend::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        Backend::Postgres => "BIGSERIAL PRIMARY KEY",
    };

    TEMPLATE
        .iter()
        .map(|statement| statement.replace(ID_PLACEHOLDER, id_column))
        .collect()
}

use serde::{Deserialize, Serialize};

/// `labels` 테이블 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

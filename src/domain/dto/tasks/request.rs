use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::domain::entities::tasks::TaskQuery;
use crate::utils::nullable::deserialize_some;
use crate::utils::string_utils::{clean_optional_string, not_blank};

/// 태스크 생성 요청
///
/// `status`는 상태 슬러그, `taskLabelIds`는 라벨 id 집합입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateRequest {
    pub index: Option<i64>,

    #[serde(rename = "assignee_id")]
    pub assignee_id: Option<i64>,

    #[validate(length(min = 1, message = "제목은 필수입니다"), custom(function = "not_blank"))]
    #[schema(example = "Write the release notes")]
    pub title: String,

    pub content: Option<String>,

    #[validate(length(min = 1, message = "상태는 필수입니다"))]
    #[schema(example = "draft")]
    pub status: String,

    #[serde(default)]
    #[schema(value_type = Option<Vec<i64>>)]
    pub task_label_ids: Option<BTreeSet<i64>>,
}

/// 태스크 수정 요청
///
/// 필드가 없으면 유지, `null`이면 비웁니다. `title`과 `status`는 `null`이 될 수 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_task_update"))]
pub struct TaskUpdateRequest {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i64>)]
    pub index: Option<Option<i64>>,

    #[serde(rename = "assignee_id", default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i64>)]
    pub assignee_id: Option<Option<i64>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub content: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub status: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Vec<i64>>)]
    pub task_label_ids: Option<Option<BTreeSet<i64>>>,
}

fn validate_task_update(request: &TaskUpdateRequest) -> Result<(), ValidationError> {
    match &request.title {
        Some(None) => {
            return Err(ValidationError::new("title_null").with_message("제목은 null일 수 없습니다".into()));
        }
        Some(Some(title)) if title.trim().is_empty() => {
            return Err(ValidationError::new("title_blank").with_message("제목은 비어 있을 수 없습니다".into()));
        }
        _ => {}
    }

    match &request.status {
        Some(None) => Err(ValidationError::new("status_null").with_message("상태는 null일 수 없습니다".into())),
        Some(Some(status)) if status.trim().is_empty() => {
            Err(ValidationError::new("status_blank").with_message("상태는 비어 있을 수 없습니다".into()))
        }
        _ => Ok(()),
    }
}

/// `GET /api/tasks` 쿼리 파라미터
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TaskFilterParams {
    /// 제목 부분 일치 (대소문자 무시)
    pub title_cont: Option<String>,
    /// 담당자 id
    pub assignee_id: Option<i64>,
    /// 상태 슬러그
    pub status: Option<String>,
    /// 라벨 id
    pub label_id: Option<i64>,
}

impl From<TaskFilterParams> for TaskQuery {
    fn from(params: TaskFilterParams) -> Self {
        Self {
            title_cont: clean_optional_string(params.title_cont),
            assignee_id: params.assignee_id,
            status: clean_optional_string(params.status),
            label_id: params.label_id,
        }
    }
}

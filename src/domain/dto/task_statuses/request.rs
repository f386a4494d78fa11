use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::string_utils::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaskStatusCreateRequest {
    #[validate(length(min = 1, message = "이름은 필수입니다"), custom(function = "not_blank"))]
    #[schema(example = "Draft")]
    pub name: String,

    #[validate(length(min = 1, message = "슬러그는 필수입니다"), custom(function = "not_blank"))]
    #[schema(example = "draft")]
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaskStatusUpdateRequest {
    #[validate(length(min = 1, message = "이름은 비어 있을 수 없습니다"), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "슬러그는 비어 있을 수 없습니다"), custom(function = "not_blank"))]
    pub slug: Option<String>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LabelCreateRequest {
    #[validate(length(min = 3, max = 1000, message = "라벨 이름은 3-1000자 사이여야 합니다"))]
    #[schema(example = "feature")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LabelUpdateRequest {
    #[validate(length(min = 3, max = 1000, message = "라벨 이름은 3-1000자 사이여야 합니다"))]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_name_length_bounds() {
        let too_short = LabelCreateRequest { name: "ab".to_string() };
        let shortest = LabelCreateRequest { name: "bug".to_string() };
        let too_long = LabelCreateRequest { name: "x".repeat(1001) };

        assert!(too_short.validate().is_err());
        assert!(shortest.validate().is_ok());
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let request = LabelCreateRequest { name: String::new() };
        assert!(request.validate().is_err());

        let update = LabelUpdateRequest { name: Some(String::new()) };
        assert!(update.validate().is_err());
    }
}

use crate::shared::validation::{require_id, Validate};
use serde::{Deserialize, Serialize};

/// Body returned by every create endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

impl Validate for CreatedResponse {
    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_decodes_and_validates() {
        let ok: CreatedResponse = serde_json::from_str(r#"{"id":"job-42"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let blank: CreatedResponse = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert!(blank.validate().is_err());
    }
}

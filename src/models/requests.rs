use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to chat with the assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Request to teach the assistant a new answer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(alias = "correctResponse")]
    pub correct_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_rejects_empty_message() {
        let req = FeedbackRequest {
            message: String::new(),
            correct_response: "answer".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_feedback_accepts_camel_case_alias() {
        let req: FeedbackRequest =
            serde_json::from_str(r#"{"message": "hi", "correctResponse": "hello"}"#).unwrap();
        assert_eq!(req.correct_response, "hello");
        assert!(req.validate().is_ok());
    }
}

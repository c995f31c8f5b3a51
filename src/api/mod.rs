//! Wire payloads for the EventSync chat backend.
//!
//! The backend exposes a single endpoint, `POST {base}/chat`, that accepts
//! `{"message": "..."}` and answers `{"response": "..."}`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_single_message_field() {
        let request = ChatRequest {
            message: "plan a launch party".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"message":"plan a launch party"}"#
        );
    }

    #[test]
    fn reply_ignores_extra_fields() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"response":"Sounds fun!","session":"abc"}"#).unwrap();
        assert_eq!(reply.response, "Sounds fun!");
    }

    #[test]
    fn reply_without_response_field_is_rejected() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"reply":"nope"}"#).is_err());
        assert!(serde_json::from_str::<ChatReply>(r#"{"response":42}"#).is_err());
    }
}

use serde::{Deserialize, Serialize};

/// Единое тело ответа с сообщением: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Достаёт поле `message` из произвольного JSON-тела, если оно там есть
    pub fn extract(body: &[u8]) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message() {
        assert_eq!(
            ApiMessage::extract(br#"{"message":"Username sudah dipakai"}"#),
            Some("Username sudah dipakai".to_string())
        );
        assert_eq!(ApiMessage::extract(br#"{"error":"x"}"#), None);
        assert_eq!(ApiMessage::extract(br#"{"message":""}"#), None);
        assert_eq!(ApiMessage::extract(b"<html>"), None);
    }
}

//! Decoding and rendering of payloads pushed by the notification service.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum InboundMessage {
    Structured(Value),
    Raw(String),
}

/// Envelope the notification service wraps its pushes in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl InboundMessage {
    /// Never fails: anything that is not JSON is kept as raw text.
    pub fn decode(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => InboundMessage::Structured(value),
            Err(_) => InboundMessage::Raw(text.to_owned()),
        }
    }

    pub fn decode_bytes(bytes: &[u8]) -> Self {
        Self::decode(&String::from_utf8_lossy(bytes))
    }

    pub fn notification(&self) -> Option<Notification> {
        match self {
            InboundMessage::Structured(value @ Value::Object(_)) => {
                Notification::deserialize(value).ok()
            }
            _ => None,
        }
    }

    /// The line printed for this message.
    pub fn render(&self) -> String {
        match self {
            InboundMessage::Structured(value) => {
                // Serializing a `Value` back out cannot fail.
                let pretty =
                    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                format!("Received message: {pretty}")
            }
            InboundMessage::Raw(text) => format!("Received non-JSON message: {text}"),
        }
    }
}

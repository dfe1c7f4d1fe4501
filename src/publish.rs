//! Dry-run of publishing a notification to the message queue.
//!
//! Nothing here touches the network. The request is only described on the
//! given writer.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

pub const NOTIFICATION_QUEUE: &str = "websocket_notifications";

#[derive(Debug, Clone, PartialEq)]
pub struct PublishRequest {
    pub user_id: String,
    pub kind: String,
    pub data: Value,
}

/// Body the queue consumer expects.
#[derive(Debug, Serialize)]
pub struct QueueTask<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub user_id: &'a str,
    pub data: &'a Value,
}

impl PublishRequest {
    pub fn new(user_id: impl Into<String>, kind: impl Into<String>, data: Value) -> Self {
        Self {
            user_id: user_id.into(),
            kind: kind.into(),
            data,
        }
    }

    /// What `--test-publish` sends.
    pub fn sample(user_id: impl Into<String>) -> Self {
        Self::new(
            user_id,
            "test",
            json!({
                "message": "Hello from test script!",
                "timestamp": "2023-01-01T00:00:00Z",
            }),
        )
    }

    pub fn task(&self) -> QueueTask<'_> {
        QueueTask {
            kind: &self.kind,
            user_id: &self.user_id,
            data: &self.data,
        }
    }
}

pub fn simulate_publish<W: Write>(request: &PublishRequest, out: &mut W) -> io::Result<()> {
    let body = serde_json::to_string(&request.task()).map_err(io::Error::from)?;

    writeln!(out, "Would publish message to RabbitMQ:")?;
    writeln!(out, "  User ID: {}", request.user_id)?;
    writeln!(out, "  Type: {}", request.kind)?;
    writeln!(out, "  Data: {}", request.data)?;
    writeln!(out, "  Body: {body}")?;
    writeln!(
        out,
        "Implementation would use RabbitMQ client to publish to '{NOTIFICATION_QUEUE}' queue"
    )?;
    out.flush()
}

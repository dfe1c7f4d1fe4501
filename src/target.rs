use std::fmt;

use tokio_tungstenite::tungstenite::http::Uri;

use crate::error::{ProbeError, Result};

pub const DEFAULT_URI: &str = "ws://localhost:8081/ws";

/// Where the listener connects: a base address plus the user the session belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    base: String,
    user_id: String,
}

impl ConnectionTarget {
    pub fn new(base: impl Into<String>, user_id: impl Into<String>) -> Result<Self> {
        let target = Self {
            base: base.into(),
            user_id: user_id.into(),
        };

        if target.user_id.is_empty() {
            return Err(ProbeError::InvalidTarget("user id is empty".into()));
        }

        target
            .request_uri()
            .parse::<Uri>()
            .map_err(|e| ProbeError::InvalidTarget(format!("{}: {e}", target.base())))?;

        Ok(target)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The id goes in verbatim, no percent-encoding.
    pub fn request_uri(&self) -> String {
        format!("{}?user_id={}", self.base, self.user_id)
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.request_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_user_id_query() {
        let target = ConnectionTarget::new(DEFAULT_URI, "alice").unwrap();
        assert_eq!(target.request_uri(), "ws://localhost:8081/ws?user_id=alice");
        assert_eq!(target.to_string(), target.request_uri());
        assert_eq!(target.base(), DEFAULT_URI);
    }

    #[test]
    fn rejects_empty_user_id() {
        let err = ConnectionTarget::new(DEFAULT_URI, "").unwrap_err();
        assert!(matches!(err, ProbeError::InvalidTarget(_)));
    }

    #[test]
    fn rejects_unparsable_base() {
        let err = ConnectionTarget::new("ws://bad host/ws", "alice").unwrap_err();
        assert!(matches!(err, ProbeError::InvalidTarget(_)));
        assert!(err.to_string().contains("ws://bad host/ws"));
    }
}

use std::io;

use thiserror::Error;
use tokio_tungstenite::tungstenite::{self, error::ProtocolError};

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("WebSocket connection closed")]
    ConnectionClosed,

    #[error("invalid connection target: {0}")]
    InvalidTarget(String),

    #[error("{0}")]
    Connect(#[source] tungstenite::Error),

    #[error("{0}")]
    Read(#[source] tungstenite::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Sorts an error seen on the read path into a closed session or a real fault.
    pub fn from_read(err: tungstenite::Error) -> Self {
        match &err {
            tungstenite::Error::ConnectionClosed
            | tungstenite::Error::AlreadyClosed
            | tungstenite::Error::Protocol(ProtocolError::ResetWithoutClosingHandshake) => {
                ProbeError::ConnectionClosed
            }
            tungstenite::Error::Io(e) if is_disconnect(e.kind()) => ProbeError::ConnectionClosed,
            _ => ProbeError::Read(err),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ProbeError::ConnectionClosed)
    }
}

fn is_disconnect(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_variants_are_not_faults() {
        assert!(ProbeError::from_read(tungstenite::Error::ConnectionClosed).is_closed());
        assert!(ProbeError::from_read(tungstenite::Error::AlreadyClosed).is_closed());
        assert!(ProbeError::from_read(tungstenite::Error::Protocol(
            ProtocolError::ResetWithoutClosingHandshake
        ))
        .is_closed());

        let reset = io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer");
        assert!(ProbeError::from_read(tungstenite::Error::Io(reset)).is_closed());
    }

    #[test]
    fn other_read_errors_stay_faults() {
        let err = ProbeError::from_read(tungstenite::Error::Protocol(
            ProtocolError::NonZeroReservedBits,
        ));
        assert!(matches!(err, ProbeError::Read(_)));
        assert!(!err.is_closed());
    }
}

//! Error types for the garlic transport.
//!
//! One enum per layer, wrapped upward with a stable descriptive prefix so
//! the causal chain stays inspectable end to end. Nothing in this layer
//! retries; recovery policy belongs to the caller.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use super::constants::ProtocolTag;
use crate::addr::GarlicAddr;

/// Convenience alias for transport-layer results.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors in the address codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Destination text shorter than a short-form hash.
    #[error("destination too short: {len} chars, need at least 52")]
    TooShort {
        /// Length of the rejected input.
        len: usize,
    },

    /// Structured address does not have exactly one protocol component.
    #[error("expected exactly 1 protocol component in address, found {count}")]
    ProtocolCount {
        /// Number of components present.
        count: usize,
    },

    /// Textual form that cannot be parsed.
    #[error("malformed address: {0}")]
    Malformed(String),

    /// Single component whose tag does not carry a destination.
    #[error("{tag} component does not carry a dialable destination")]
    NotADestination {
        /// The offending tag.
        tag: ProtocolTag,
    },
}

/// Errors surfaced by the external overlay session client.
///
/// Implementations of the [`session`](crate::session) seam produce these;
/// the transport only wraps them.
#[derive(Debug, Error)]
pub enum SessionError {
    /// I/O failure on the session control or data channel.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The session bridge refused the request.
    #[error("session request rejected: {0}")]
    Rejected(String),

    /// The session (or its primary) is gone.
    #[error("session closed")]
    Closed,
}

/// The session-creation step that failed during transport bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    /// Creating the primary session.
    Primary,
    /// Creating the inbound sub-session.
    Inbound,
    /// Creating the outbound sub-session.
    Outbound,
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BootstrapStep::Primary => "primary session",
            BootstrapStep::Inbound => "inbound sub-session",
            BootstrapStep::Outbound => "outbound sub-session",
        })
    }
}

/// Top-level transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// One of the three session-creation steps failed; the whole bootstrap
    /// is aborted and no transport is returned.
    #[error("failed to create {step} with the overlay session client")]
    Bootstrap {
        /// Which step failed.
        step: BootstrapStep,
        /// The session client's failure.
        #[source]
        source: SessionError,
    },

    /// The address is not dialable by this transport. No I/O was attempted.
    #[error("can't dial \"{addr}\"")]
    DialRejected {
        /// The rejected address.
        addr: GarlicAddr,
    },

    /// The session dial primitive failed.
    #[error("failed to dial remote destination")]
    DialFailure(#[source] SessionError),

    /// The configured dial deadline elapsed before the session answered.
    #[error("dial timed out after {0:?}")]
    DialTimeout(Duration),

    /// A session primitive outside the dial path failed.
    #[error("overlay session operation failed")]
    Session(#[source] SessionError),

    /// A raw accept or an accept-side address derivation failed. The
    /// listener itself stays usable for subsequent accepts.
    #[error("failed to accept connection")]
    Accept(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Address conversion failed.
    #[error("address conversion failed")]
    Addr(#[from] AddrError),

    /// The external upgrader rejected the connection or listener.
    #[error("connection upgrade failed")]
    Upgrade(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_step_display() {
        assert_eq!(BootstrapStep::Primary.to_string(), "primary session");
        assert_eq!(BootstrapStep::Inbound.to_string(), "inbound sub-session");
        assert_eq!(BootstrapStep::Outbound.to_string(), "outbound sub-session");
    }

    #[test]
    fn test_bootstrap_error_keeps_cause() {
        let err = TransportError::Bootstrap {
            step: BootstrapStep::Outbound,
            source: SessionError::Rejected("tunnel build expired".into()),
        };
        assert_eq!(
            err.to_string(),
            "failed to create outbound sub-session with the overlay session client"
        );
        let source = std::error::Error::source(&err).expect("source kept");
        assert_eq!(
            source.to_string(),
            "session request rejected: tunnel build expired"
        );
    }
}

//! Consumed interface of the overlay session client.
//!
//! A primary session owns one identity and any number of sub-sessions;
//! closing the primary transitively invalidates its sub-sessions. Dial and
//! accept primitives are expected to be reentrant: the transport may issue
//! them concurrently from multiple tasks.

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::identity::SessionIdentity;
use super::options::SessionOptions;
use crate::core::SessionError;

/// Scope of a sub-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubSessionScope {
    /// Carries accepted (inbound) streams.
    Inbound,
    /// Carries dialed (outbound) streams, optionally pinned to a fixed
    /// local port; the remote port stays unrestricted.
    Outbound {
        /// Fixed local port, or `None` to let the overlay pick.
        local_port: Option<u16>,
    },
}

/// Entry point to the overlay session bridge.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Primary session handle produced by this client.
    type Primary: PrimarySession;

    /// Create a primary session bound to `identity`.
    ///
    /// This is a tunnel build: expect it to take seconds, dominated by
    /// overlay round trips.
    async fn create_primary_session(
        &self,
        name: &str,
        identity: &SessionIdentity,
        options: &SessionOptions,
    ) -> Result<Self::Primary, SessionError>;
}

/// A primary session bound to one identity.
#[async_trait]
pub trait PrimarySession: Send + Sync {
    /// Sub-session handle produced by this session.
    type Sub: SubSession;

    /// Create a child sub-session with the given scope.
    async fn sub_session(
        &self,
        name: &str,
        scope: SubSessionScope,
    ) -> Result<Self::Sub, SessionError>;

    /// The destination this session's identity answers on.
    fn destination(&self) -> &str;

    /// Close the session and, transitively, all of its sub-sessions.
    /// Idempotent.
    async fn close(&self) -> Result<(), SessionError>;
}

/// A sub-session scoped to inbound or outbound traffic.
#[async_trait]
pub trait SubSession: Send + Sync {
    /// Raw duplex stream carried by this sub-session. No address
    /// accessors: the transport stamps addresses on via its adapters.
    type Stream: AsyncRead + AsyncWrite + Send + Unpin + 'static;

    /// Raw listener produced by [`SubSession::listen`].
    type Listener: RawListener<Stream = Self::Stream>;

    /// Dial the given destination string. Blocking network call.
    async fn dial(&self, destination: &str) -> Result<Self::Stream, SessionError>;

    /// Start listening on this sub-session's own destination.
    async fn listen(&self) -> Result<Self::Listener, SessionError>;

    /// The destination this sub-session is bound to.
    fn destination(&self) -> &str;
}

/// A raw overlay listener.
#[async_trait]
pub trait RawListener: Send + Sync {
    /// Raw duplex stream type yielded by accepts.
    type Stream: AsyncRead + AsyncWrite + Send + Unpin + 'static;

    /// Accept one stream, returning it together with the peer's native
    /// destination string.
    async fn accept(&self) -> Result<(Self::Stream, String), SessionError>;

    /// The destination this listener is bound to.
    fn destination(&self) -> &str;

    /// Stop listening. Idempotent.
    async fn close(&self) -> Result<(), SessionError>;
}

//! The transport capability contract.
//!
//! The outer p2p stack drives any transport through this polymorphic
//! interface; [`GarlicTransport`](crate::transport::GarlicTransport) is this
//! crate's implementation of it.

use async_trait::async_trait;

use super::constants::ProtocolTag;
use super::error::TransportResult;
use crate::addr::GarlicAddr;

/// Opaque identity of the peer being dialed.
///
/// Minted and interpreted by the outer stack; this transport only passes it
/// through to the upgrader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerId(String);

impl PeerId {
    /// Wrap a peer identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PeerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability contract every dialable/listenable transport satisfies.
///
/// `dial`, `listen`, and `close` are awaited on the calling task; a dial
/// future is safe to drop to cancel the attempt.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fully capable (secured, multiplexed) connection produced by the
    /// external upgrader.
    type Conn: Send;

    /// Fully capable listener produced by the external upgrader.
    type Listener: Send;

    /// Whether this transport believes it can dial the given address.
    /// Purely local, no I/O.
    fn can_dial(&self, addr: &GarlicAddr) -> bool;

    /// Dial the remote address and upgrade the resulting stream.
    async fn dial(&self, addr: GarlicAddr, peer: PeerId) -> TransportResult<Self::Conn>;

    /// Open a listener and upgrade it.
    async fn listen(&self, addr: GarlicAddr) -> TransportResult<Self::Listener>;

    /// Close the transport. Idempotent.
    async fn close(&self) -> TransportResult<()>;

    /// Protocol tags this transport advertises as dialable/listenable.
    fn protocols(&self) -> Vec<ProtocolTag>;

    /// Whether this transport proxies for other protocols.
    fn proxy(&self) -> bool;
}

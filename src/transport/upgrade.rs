//! Seam to the outer stack's connection upgrade step.

use async_trait::async_trait;

use crate::core::PeerId;

/// External collaborator adding security and stream multiplexing atop a raw
/// connection, producing fully capable connections and listeners.
///
/// `C` is the connection handed over (this transport passes a
/// [`ConnectionAdapter`](super::ConnectionAdapter)), `L` the listener
/// (a [`ListenerAdapter`](super::ListenerAdapter)). Upgrade failures are
/// surfaced by the transport unchanged, as the source of
/// [`TransportError::Upgrade`](crate::core::TransportError::Upgrade).
#[async_trait]
pub trait Upgrader<C, L>: Send + Sync {
    /// Fully capable connection.
    type Conn: Send;

    /// Fully capable listener.
    type Listener: Send;

    /// Error produced when an upgrade is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Secure and multiplex an outbound connection.
    async fn upgrade_outbound(&self, conn: C, peer: PeerId) -> Result<Self::Conn, Self::Error>;

    /// Wrap a listener so accepted connections are upgraded inbound.
    fn upgrade_listener(&self, listener: L) -> Self::Listener;
}

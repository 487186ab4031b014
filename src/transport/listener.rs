//! Listener adapter deriving addresses per accepted stream.

use tracing::debug;

use crate::addr::{GarlicAddr, destination_to_addr};
use crate::core::{TransportError, TransportResult};
use crate::session::RawListener;

use super::connection::ConnectionAdapter;

/// A raw overlay listener plus its derived local structured address.
///
/// Created once per `listen()` call. Each accept derives the peer's
/// structured address fresh; a failure in the raw accept or in either
/// address derivation fails that accept with [`TransportError::Accept`]
/// (never a partially-addressed connection) and leaves the listener usable
/// for subsequent accepts.
#[derive(Debug)]
pub struct ListenerAdapter<L> {
    raw: L,
    local_addr: GarlicAddr,
}

impl<L: RawListener> ListenerAdapter<L> {
    /// Wrap a raw listener, deriving its local structured address from the
    /// bound destination.
    pub fn new(raw: L) -> TransportResult<Self> {
        let local_addr = destination_to_addr(raw.destination())?;
        Ok(Self { raw, local_addr })
    }

    /// Accept one connection, stamped with both endpoint addresses.
    pub async fn accept(&self) -> TransportResult<ConnectionAdapter<L::Stream>> {
        let (stream, remote_destination) = self
            .raw
            .accept()
            .await
            .map_err(|e| TransportError::Accept(Box::new(e)))?;

        let remote_addr = destination_to_addr(&remote_destination)
            .map_err(|e| TransportError::Accept(Box::new(e)))?;

        let conn = ConnectionAdapter::new(stream, self.local_addr.clone(), remote_addr)
            .map_err(|e| TransportError::Accept(Box::new(e)))?;

        debug!(remote = %conn.remote_multiaddr(), "accepted overlay stream");
        Ok(conn)
    }

    /// The listener's structured address.
    pub fn multiaddr(&self) -> &GarlicAddr {
        &self.local_addr
    }

    /// The listener's bound native destination.
    pub fn destination(&self) -> &str {
        self.raw.destination()
    }

    /// Stop listening. Idempotent, per the raw listener's contract.
    pub async fn close(&self) -> TransportResult<()> {
        self.raw.close().await.map_err(TransportError::Session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::io::DuplexStream;
    use tokio::sync::Mutex;

    const LISTEN_B32: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const PEER_B32: &str = "ugbgtbk6qvbymwgv2clzeefcxrjz4milklcyi6hzqxmcxxnwjh5a";

    /// Raw listener double yielding a scripted sequence of accepts.
    #[derive(Debug)]
    struct QueueListener {
        destination: String,
        pending: Mutex<VecDeque<Result<(DuplexStream, String), SessionError>>>,
    }

    impl QueueListener {
        fn new(
            destination: &str,
            accepts: Vec<Result<(DuplexStream, String), SessionError>>,
        ) -> Self {
            Self {
                destination: destination.to_owned(),
                pending: Mutex::new(accepts.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl RawListener for QueueListener {
        type Stream = DuplexStream;

        async fn accept(&self) -> Result<(DuplexStream, String), SessionError> {
            self.pending
                .lock()
                .await
                .pop_front()
                .unwrap_or(Err(SessionError::Closed))
        }

        fn destination(&self) -> &str {
            &self.destination
        }

        async fn close(&self) -> Result<(), SessionError> {
            Ok(())
        }
    }

    fn stream() -> DuplexStream {
        // The far end is dropped; these tests never do I/O on the stream.
        let (near, _far) = tokio::io::duplex(8);
        near
    }

    #[tokio::test]
    async fn test_accept_derives_both_addresses() {
        let raw = QueueListener::new(
            LISTEN_B32,
            vec![Ok((stream(), format!("{PEER_B32}.b32.i2p")))],
        );
        let listener = ListenerAdapter::new(raw).unwrap();
        assert_eq!(
            listener.multiaddr().to_string(),
            format!("/garlic32/{LISTEN_B32}")
        );

        let conn = listener.accept().await.unwrap();
        assert_eq!(
            conn.local_multiaddr().to_string(),
            format!("/garlic32/{LISTEN_B32}")
        );
        assert_eq!(
            conn.remote_multiaddr().to_string(),
            format!("/garlic32/{PEER_B32}")
        );
        assert_eq!(conn.remote_destination(), format!("{PEER_B32}.b32.i2p"));
    }

    #[tokio::test]
    async fn test_bad_peer_destination_fails_that_accept_only() {
        let raw = QueueListener::new(
            LISTEN_B32,
            vec![
                Ok((stream(), "way-too-short".to_owned())),
                Ok((stream(), PEER_B32.to_owned())),
            ],
        );
        let listener = ListenerAdapter::new(raw).unwrap();

        // First accept fails closed on the bad derivation...
        let err = listener.accept().await.unwrap_err();
        assert!(matches!(err, TransportError::Accept(_)));

        // ...the listener stays usable for the next accept.
        let conn = listener.accept().await.unwrap();
        assert_eq!(
            conn.remote_multiaddr().to_string(),
            format!("/garlic32/{PEER_B32}")
        );
    }

    #[tokio::test]
    async fn test_raw_accept_failure_is_accept_error() {
        let raw = QueueListener::new(LISTEN_B32, vec![Err(SessionError::Closed)]);
        let listener = ListenerAdapter::new(raw).unwrap();
        let err = listener.accept().await.unwrap_err();
        assert!(matches!(err, TransportError::Accept(_)));
    }

    #[tokio::test]
    async fn test_unrepresentable_bound_destination_rejected_up_front() {
        let raw = QueueListener::new("bogus", Vec::new());
        let err = ListenerAdapter::new(raw).unwrap_err();
        assert!(matches!(err, TransportError::Addr(_)));
    }
}

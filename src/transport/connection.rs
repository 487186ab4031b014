//! Connection adapter stamping addresses onto raw overlay streams.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

use crate::addr::{GarlicAddr, addr_to_destination};
use crate::core::AddrError;

/// A raw duplex overlay stream plus its two endpoint addresses.
///
/// Raw overlay streams carry no address accessors; this wrapper stamps the
/// local and remote structured addresses on at construction so the stream
/// satisfies the outer stack's connection contract. Byte I/O passes through
/// unmodified; the reported addresses never change after construction.
#[derive(Debug)]
pub struct ConnectionAdapter<C> {
    stream: C,
    local_addr: GarlicAddr,
    remote_addr: GarlicAddr,
    local_destination: String,
    remote_destination: String,
}

impl<C> ConnectionAdapter<C> {
    /// Wrap `stream` with its endpoint addresses.
    ///
    /// Both addresses must be single-destination addresses; the native
    /// destination strings are derived from them here, once, and this is
    /// the only point where construction can fail.
    pub fn new(
        stream: C,
        local_addr: GarlicAddr,
        remote_addr: GarlicAddr,
    ) -> Result<Self, AddrError> {
        let local_destination = addr_to_destination(&local_addr)?;
        let remote_destination = addr_to_destination(&remote_addr)?;
        Ok(Self {
            stream,
            local_addr,
            remote_addr,
            local_destination,
            remote_destination,
        })
    }

    /// The local structured address, exactly as supplied at construction.
    pub fn local_multiaddr(&self) -> &GarlicAddr {
        &self.local_addr
    }

    /// The remote structured address, exactly as supplied at construction.
    pub fn remote_multiaddr(&self) -> &GarlicAddr {
        &self.remote_addr
    }

    /// The local endpoint as a native destination string.
    pub fn local_destination(&self) -> &str {
        &self.local_destination
    }

    /// The remote endpoint as a native destination string.
    pub fn remote_destination(&self) -> &str {
        &self.remote_destination
    }

    /// Reference to the wrapped stream.
    pub fn get_ref(&self) -> &C {
        &self.stream
    }

    /// Consume the adapter, returning the wrapped stream.
    pub fn into_inner(self) -> C {
        self.stream
    }
}

impl<C: AsyncRead + Unpin> AsyncRead for ConnectionAdapter<C> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().stream).poll_read(cx, buf)
    }
}

impl<C: AsyncWrite + Unpin> AsyncWrite for ConnectionAdapter<C> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.get_mut().stream).poll_write(cx, buf)
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().stream).poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().stream).poll_shutdown(cx)
    }

    fn poll_write_vectored(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        bufs: &[io::IoSlice<'_>],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.get_mut().stream).poll_write_vectored(cx, bufs)
    }

    fn is_write_vectored(&self) -> bool {
        self.stream.is_write_vectored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::{Component, destination_to_addr};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    const LOCAL_B32: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const REMOTE_B32: &str = "ugbgtbk6qvbymwgv2clzeefcxrjz4milklcyi6hzqxmcxxnwjh5a";

    fn addr(value: &str) -> GarlicAddr {
        destination_to_addr(value).unwrap()
    }

    #[tokio::test]
    async fn test_byte_passthrough() {
        let (near, mut far) = tokio::io::duplex(64);
        let mut conn = ConnectionAdapter::new(near, addr(LOCAL_B32), addr(REMOTE_B32)).unwrap();

        conn.write_all(b"garlic").await.unwrap();
        conn.flush().await.unwrap();
        let mut buf = [0u8; 6];
        far.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"garlic");

        far.write_all(b"cloves").await.unwrap();
        let mut buf = [0u8; 6];
        conn.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"cloves");
    }

    #[tokio::test]
    async fn test_addresses_verbatim() {
        let (near, _far) = tokio::io::duplex(8);
        let local = addr(LOCAL_B32);
        let remote = addr(REMOTE_B32);
        let conn = ConnectionAdapter::new(near, local.clone(), remote.clone()).unwrap();

        assert_eq!(conn.local_multiaddr(), &local);
        assert_eq!(conn.remote_multiaddr(), &remote);
        assert_eq!(
            conn.local_destination(),
            format!("{LOCAL_B32}.b32.i2p")
        );
        assert_eq!(
            conn.remote_destination(),
            format!("{REMOTE_B32}.b32.i2p")
        );
    }

    #[tokio::test]
    async fn test_construction_rejects_invalid_address() {
        let (near, _far) = tokio::io::duplex(8);
        let bad = GarlicAddr::new(Component::Tcp(4001));
        let err = ConnectionAdapter::new(near, bad, addr(REMOTE_B32)).unwrap_err();
        assert!(matches!(err, AddrError::NotADestination { .. }));
    }

    #[tokio::test]
    async fn test_shutdown_passthrough() {
        let (near, mut far) = tokio::io::duplex(8);
        let mut conn = ConnectionAdapter::new(near, addr(LOCAL_B32), addr(REMOTE_B32)).unwrap();

        conn.shutdown().await.unwrap();
        let mut buf = Vec::new();
        // Far end sees EOF once the adapter has shut its write half down.
        far.read_to_end(&mut buf).await.unwrap();
        assert!(buf.is_empty());
    }
}

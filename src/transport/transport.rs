//! The garlic transport: session bootstrap, dial, and listen.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::addr::{GarlicAddr, addr_to_destination, destination_to_addr};
use crate::core::{
    BootstrapStep, PeerId, ProtocolTag, Transport, TransportError, TransportResult,
};
use crate::session::{PrimarySession, SessionClient, SessionIdentity, SubSession, SubSessionScope};

use super::config::TransportConfig;
use super::connection::ConnectionAdapter;
use super::listener::ListenerAdapter;
use super::upgrade::Upgrader;

type SubOf<S> = <<S as SessionClient>::Primary as PrimarySession>::Sub;
type StreamOf<S> = <SubOf<S> as SubSession>::Stream;
type RawListenerOf<S> = <SubOf<S> as SubSession>::Listener;

/// Builder performing the blocking session bootstrap.
///
/// Construction of a [`GarlicTransport`] takes three sequential fallible
/// steps (primary session, then inbound and outbound sub-sessions), each an
/// overlay round trip that can take seconds. Any step failing aborts the
/// whole construction: the only way to obtain a transport is for every step
/// to have succeeded, and there is no internal retry.
#[derive(Debug)]
pub struct TransportBuilder<S> {
    client: S,
    identity: SessionIdentity,
    config: TransportConfig,
}

impl<S: SessionClient> TransportBuilder<S> {
    /// Start a bootstrap over `client` with the given identity.
    pub fn new(client: S, identity: SessionIdentity) -> Self {
        Self {
            client,
            identity,
            config: TransportConfig::default(),
        }
    }

    /// Replace the default configuration.
    pub fn config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    /// Establish the session set and return the ready transport.
    pub async fn establish<U>(self, upgrader: U) -> TransportResult<GarlicTransport<S, U>>
    where
        U: Upgrader<ConnectionAdapter<StreamOf<S>>, ListenerAdapter<RawListenerOf<S>>>,
    {
        let Self {
            client,
            identity,
            config,
        } = self;

        // Unique names so repeated bootstraps never collide on the bridge.
        let suffix: u32 = rand::random();
        let prefix = config.session_name_prefix.as_str();

        debug!(name = %format!("{prefix}-primary-{suffix}"), "creating primary session");
        let primary = client
            .create_primary_session(
                &format!("{prefix}-primary-{suffix}"),
                &identity,
                &config.session_options,
            )
            .await
            .map_err(|source| TransportError::Bootstrap {
                step: BootstrapStep::Primary,
                source,
            })?;

        let inbound = primary
            .sub_session(&format!("{prefix}-inbound-{suffix}"), SubSessionScope::Inbound)
            .await
            .map_err(|source| TransportError::Bootstrap {
                step: BootstrapStep::Inbound,
                source,
            })?;

        let outbound = primary
            .sub_session(
                &format!("{prefix}-outbound-{suffix}"),
                SubSessionScope::Outbound {
                    local_port: config.outbound_port,
                },
            )
            .await
            .map_err(|source| TransportError::Bootstrap {
                step: BootstrapStep::Outbound,
                source,
            })?;

        let local_addr = destination_to_addr(primary.destination())?;
        info!(local = %local_addr, "overlay sessions established");

        Ok(GarlicTransport {
            primary,
            inbound,
            outbound,
            local_addr,
            upgrader,
            config,
            closed: AtomicBool::new(false),
        })
    }
}

/// Stream transport dialing and accepting through the overlay.
///
/// Holds one primary session plus inbound and outbound sub-sessions; the
/// handles are immutable for the transport's lifetime, so dials and
/// listens need no locking. Obtained exclusively through
/// [`TransportBuilder`], which guarantees every session exists.
pub struct GarlicTransport<S: SessionClient, U> {
    primary: S::Primary,
    inbound: SubOf<S>,
    outbound: SubOf<S>,
    local_addr: GarlicAddr,
    upgrader: U,
    config: TransportConfig,
    closed: AtomicBool,
}

impl<S, U> GarlicTransport<S, U>
where
    S: SessionClient,
    U: Upgrader<ConnectionAdapter<StreamOf<S>>, ListenerAdapter<RawListenerOf<S>>>,
{
    /// Whether this transport believes it can dial the given address:
    /// exactly one component, tagged garlic64 or garlic32. No I/O.
    pub fn can_dial(&self, addr: &GarlicAddr) -> bool {
        addr.is_destination()
    }

    /// Dial the remote address, wrap the stream with both endpoint
    /// addresses, and hand it to the upgrader.
    ///
    /// Fails fast with [`TransportError::DialRejected`] before any I/O when
    /// the address is not dialable. The attempt is bounded by the
    /// configured dial timeout; dropping the returned future cancels it.
    pub async fn dial(&self, addr: GarlicAddr, peer: PeerId) -> TransportResult<U::Conn> {
        if !self.can_dial(&addr) {
            return Err(TransportError::DialRejected { addr });
        }

        let destination = addr_to_destination(&addr)?;
        debug!(remote = %addr, "dialing overlay destination");

        let stream = match self.config.dial_timeout {
            Some(limit) => tokio::time::timeout(limit, self.outbound.dial(&destination))
                .await
                .map_err(|_| TransportError::DialTimeout(limit))?,
            None => self.outbound.dial(&destination).await,
        }
        .map_err(TransportError::DialFailure)?;

        let local_addr = destination_to_addr(self.outbound.destination())?;
        let conn = ConnectionAdapter::new(stream, local_addr, addr)?;

        self.upgrader
            .upgrade_outbound(conn, peer)
            .await
            .map_err(|e| TransportError::Upgrade(Box::new(e)))
    }

    /// Open a listener and hand it to the upgrader.
    ///
    /// The address argument is ignored: the transport always listens on
    /// the destination its inbound sub-session already owns.
    pub async fn listen(&self, _addr: GarlicAddr) -> TransportResult<U::Listener> {
        let raw = self
            .inbound
            .listen()
            .await
            .map_err(TransportError::Session)?;
        let listener = ListenerAdapter::new(raw)?;
        info!(local = %listener.multiaddr(), "listening on overlay destination");
        Ok(self.upgrader.upgrade_listener(listener))
    }

    /// Close the primary session, cascading to all sub-sessions.
    /// Idempotent: the second and later calls are no-ops.
    pub async fn close(&self) -> TransportResult<()> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        debug!("closing primary session");
        self.primary.close().await.map_err(TransportError::Session)
    }

    /// Protocol tags this transport advertises as dialable/listenable.
    pub fn protocols(&self) -> Vec<ProtocolTag> {
        let mut tags = vec![ProtocolTag::Garlic64, ProtocolTag::Garlic32];
        if self.config.legacy_stream_protocol {
            tags.push(ProtocolTag::Tcp);
        }
        tags
    }

    /// This transport never proxies for another protocol.
    pub fn proxy(&self) -> bool {
        false
    }

    /// The transport's own destination as a structured address, for the
    /// outer stack to advertise.
    pub fn local_multiaddr(&self) -> &GarlicAddr {
        &self.local_addr
    }
}

#[async_trait]
impl<S, U> Transport for GarlicTransport<S, U>
where
    S: SessionClient,
    U: Upgrader<ConnectionAdapter<StreamOf<S>>, ListenerAdapter<RawListenerOf<S>>>,
{
    type Conn = U::Conn;
    type Listener = U::Listener;

    fn can_dial(&self, addr: &GarlicAddr) -> bool {
        GarlicTransport::can_dial(self, addr)
    }

    async fn dial(&self, addr: GarlicAddr, peer: PeerId) -> TransportResult<Self::Conn> {
        GarlicTransport::dial(self, addr, peer).await
    }

    async fn listen(&self, addr: GarlicAddr) -> TransportResult<Self::Listener> {
        GarlicTransport::listen(self, addr).await
    }

    async fn close(&self) -> TransportResult<()> {
        GarlicTransport::close(self).await
    }

    fn protocols(&self) -> Vec<ProtocolTag> {
        GarlicTransport::protocols(self)
    }

    fn proxy(&self) -> bool {
        GarlicTransport::proxy(self)
    }
}

impl<S: SessionClient, U> fmt::Display for GarlicTransport<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("i2p")
    }
}

impl<S: SessionClient, U> fmt::Debug for GarlicTransport<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GarlicTransport")
            .field("local_addr", &self.local_addr)
            .field("config", &self.config)
            .field("closed", &self.closed.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

//! Transport configuration.

use std::time::Duration;

use crate::core::DEFAULT_DIAL_TIMEOUT;
use crate::session::SessionOptions;

/// Transport configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Prefix for generated session names; a random suffix is appended per
    /// bootstrap so repeated bootstraps never collide.
    pub session_name_prefix: String,

    /// Fixed local port for the outbound sub-session, or `None` to let the
    /// overlay pick. The remote port is always unrestricted.
    pub outbound_port: Option<u16>,

    /// Deadline for a single dial, or `None` to wait for the session
    /// primitive indefinitely.
    pub dial_timeout: Option<Duration>,

    /// Advertise the legacy `/tcp` stream-transport tag alongside the
    /// garlic tags. Permissive mode for older peers; the tag is never
    /// dialable through this transport.
    pub legacy_stream_protocol: bool,

    /// Tunnel options forwarded verbatim to primary-session creation.
    pub session_options: SessionOptions,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            session_name_prefix: "garlic".to_owned(),
            outbound_port: None,
            dial_timeout: Some(DEFAULT_DIAL_TIMEOUT),
            legacy_stream_protocol: false,
            session_options: SessionOptions::default(),
        }
    }
}

impl TransportConfig {
    /// Start building a configuration.
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }
}

/// Builder for [`TransportConfig`].
#[derive(Debug, Clone, Default)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session name prefix.
    pub fn session_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.session_name_prefix = prefix.into();
        self
    }

    /// Pin the outbound sub-session to a fixed local port.
    pub fn outbound_port(mut self, port: u16) -> Self {
        self.config.outbound_port = Some(port);
        self
    }

    /// Set the dial deadline.
    pub fn dial_timeout(mut self, timeout: Duration) -> Self {
        self.config.dial_timeout = Some(timeout);
        self
    }

    /// Wait indefinitely on dials instead of applying a deadline.
    pub fn no_dial_timeout(mut self) -> Self {
        self.config.dial_timeout = None;
        self
    }

    /// Advertise the legacy `/tcp` tag.
    pub fn legacy_stream_protocol(mut self, enabled: bool) -> Self {
        self.config.legacy_stream_protocol = enabled;
        self
    }

    /// Set the tunnel options forwarded to session creation.
    pub fn session_options(mut self, options: SessionOptions) -> Self {
        self.config.session_options = options;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TransportConfig {
        self.config
    }
}

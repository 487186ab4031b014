//! # Garlic Transport
//!
//! An I2P stream transport for peer-to-peer stacks.
//!
//! This crate lets a generic p2p transport stack dial and accept encrypted
//! streams through the I2P anonymizing overlay without the rest of the stack
//! knowing overlay-specific addressing or session semantics. It provides:
//!
//! - **Address codec**: pure conversions between I2P destination strings and
//!   the stack's structured multi-protocol address form ([`GarlicAddr`],
//!   `/garlic64/…` and `/garlic32/…`)
//! - **Session bootstrap**: one primary overlay session plus inbound and
//!   outbound sub-sessions, established sequentially and held immutably for
//!   the transport's lifetime
//! - **Adapters**: thin wrappers stamping raw overlay streams and listeners
//!   with their structured endpoint addresses
//!
//! Encryption, stream multiplexing, retry policy, and NAT traversal are all
//! delegated: connections are handed to an external [`Upgrader`], and the
//! overlay session client itself is consumed through the [`session`] trait
//! seam.
//!
//! ## Modules
//!
//! - [`core`]: contract traits, constants, and error types
//! - [`addr`]: structured addresses and the destination codec
//! - [`session`]: overlay session client seam (identity, options, traits)
//! - [`transport`]: session bootstrap, dial/listen, connection and listener
//!   adapters
//!
//! ## Example Usage
//!
//! ```ignore
//! use garlic_transport::prelude::*;
//!
//! // `client` implements SessionClient for your overlay session bridge,
//! // `upgrader` is the outer stack's security/muxing upgrade step.
//! let identity = SessionIdentity::new(destination, private_key);
//! let transport = TransportBuilder::new(client, identity)
//!     .config(TransportConfig::builder().outbound_port(23459).build())
//!     .establish(upgrader)
//!     .await?;
//!
//! let remote: GarlicAddr = "/garlic32/ugbgtbk6qvbymwgv2clzeefcxrjz4milklcyi6hzqxmcxxnwjh5a".parse()?;
//! let conn = transport.dial(remote, peer_id).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Contract traits, constants, and errors
pub mod core;

// Structured addresses and the destination codec
pub mod addr;

// Overlay session client seam
pub mod session;

// Transport, bootstrap, and adapters
pub mod transport;

/// Prelude module for convenient imports.
pub mod prelude {
    // Contract and errors
    pub use crate::core::{
        AddrError, BootstrapStep, PeerId, ProtocolTag, Transport, TransportError,
        TransportResult,
    };

    // Addressing
    pub use crate::addr::{Component, GarlicAddr, addr_to_destination, destination_to_addr};

    // Session seam
    pub use crate::session::{
        PrimarySession, RawListener, SessionClient, SessionError, SessionIdentity, SessionOptions,
        SubSession, SubSessionScope,
    };

    // Transport and adapters
    pub use crate::transport::{
        ConnectionAdapter, GarlicTransport, ListenerAdapter, TransportBuilder, TransportConfig,
        TransportConfigBuilder, Upgrader,
    };
}

// Re-export commonly used items at crate root
pub use crate::addr::{GarlicAddr, addr_to_destination, destination_to_addr};
pub use crate::core::{PeerId, ProtocolTag, Transport, TransportError, TransportResult};
pub use crate::session::{SessionClient, SessionError, SessionIdentity};
pub use crate::transport::{
    ConnectionAdapter, GarlicTransport, ListenerAdapter, TransportBuilder, TransportConfig,
    Upgrader,
};

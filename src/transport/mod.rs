//! Garlic Transport - Transport Layer
//!
//! Session bootstrap and the capability-contract implementation:
//!
//! - **Bootstrap**: [`TransportBuilder`] establishes a primary session and
//!   its inbound/outbound sub-sessions sequentially; any failure aborts the
//!   whole construction
//! - **Dial/Listen**: [`GarlicTransport`] converts addresses, drives the
//!   session primitives, and hands everything to the external [`Upgrader`]
//! - **Adapters**: [`ConnectionAdapter`] and [`ListenerAdapter`] stamp raw
//!   overlay streams and listeners with their structured addresses
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │    Outer stack (security, muxing)       │  ← Upgrader seam
//! ├─────────────────────────────────────────┤
//! │         Transport Layer                 │  ← This module
//! │   bootstrap, dial/listen, adapters      │
//! ├─────────────────────────────────────────┤
//! │     Overlay session client              │  ← session seam
//! └─────────────────────────────────────────┘
//! ```

mod config;
mod connection;
mod listener;
#[allow(clippy::module_inception)]
mod transport;
mod upgrade;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use connection::ConnectionAdapter;
pub use listener::ListenerAdapter;
pub use transport::{GarlicTransport, TransportBuilder};
pub use upgrade::Upgrader;

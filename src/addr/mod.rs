//! Garlic Transport - Addressing
//!
//! Structured multi-protocol addresses ([`GarlicAddr`]) and the pure codec
//! between them and native overlay destination strings. No state, no I/O.
//!
//! Wire forms are bit-exact:
//!
//! - `/garlic64/<destination>`: long-form destination, unchanged
//! - `/garlic32/<52-char-value>`: short-form destination, `.b32.i2p`
//!   suffix removed
//!
//! Converting a suffixed short-form destination into the textual form and
//! back restores the suffixed string exactly; long-form destinations are
//! invariant under the round trip.

mod codec;
mod multiaddr;

pub use codec::{addr_to_destination, destination_to_addr};
pub use multiaddr::{Component, GarlicAddr};

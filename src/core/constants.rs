//! Protocol constants fixed by the I2P destination wire format.
//!
//! These values are dictated by the overlay and MUST NOT be changed.

use std::fmt;
use std::time::Duration;

// =============================================================================
// DESTINATION SHAPE
// =============================================================================

/// Length of a short-form (base32 hash) destination, suffix removed.
pub const SHORT_DEST_LEN: usize = 52;

/// Maximum total length of a short-form destination including its suffix.
///
/// Anything longer is a self-describing long-form destination.
pub const SHORT_FORM_MAX_LEN: usize = 63;

/// Literal suffix carried by short-form destinations outside the
/// structured-address form.
pub const SHORT_DEST_SUFFIX: &str = ".b32.i2p";

// =============================================================================
// TRANSPORT DEFAULTS
// =============================================================================

/// Default deadline for a single outbound dial.
///
/// Overlay dials are tunnel builds and routinely take seconds.
pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(60);

// =============================================================================
// PROTOCOL TAGS
// =============================================================================

/// Multiaddr protocol tags understood by this transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolTag {
    /// Long-form, self-describing destination.
    Garlic64,
    /// Short-form 52-character destination hash.
    Garlic32,
    /// Legacy stream-transport tag; advertised in permissive configurations,
    /// never dialable through this transport.
    Tcp,
}

impl ProtocolTag {
    /// The tag's textual wire name.
    pub const fn name(&self) -> &'static str {
        match self {
            ProtocolTag::Garlic64 => "garlic64",
            ProtocolTag::Garlic32 => "garlic32",
            ProtocolTag::Tcp => "tcp",
        }
    }

    /// Whether an address component with this tag carries a destination
    /// this transport can dial.
    pub const fn is_destination(&self) -> bool {
        matches!(self, ProtocolTag::Garlic64 | ProtocolTag::Garlic32)
    }
}

impl fmt::Display for ProtocolTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(ProtocolTag::Garlic64.name(), "garlic64");
        assert_eq!(ProtocolTag::Garlic32.name(), "garlic32");
        assert_eq!(ProtocolTag::Tcp.name(), "tcp");
    }

    #[test]
    fn test_destination_tags() {
        assert!(ProtocolTag::Garlic64.is_destination());
        assert!(ProtocolTag::Garlic32.is_destination());
        assert!(!ProtocolTag::Tcp.is_destination());
    }
}

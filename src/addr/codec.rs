//! Conversions between native destination strings and structured addresses.
//!
//! Only length and shape are validated here; cryptographic correctness of a
//! destination is the overlay's business.

use crate::core::{AddrError, SHORT_DEST_LEN, SHORT_DEST_SUFFIX, SHORT_FORM_MAX_LEN};

use super::multiaddr::{Component, GarlicAddr};

/// Convert a native destination string into a structured address.
///
/// Short-form destinations (at most 63 chars including the `.b32.i2p`
/// suffix) are stripped of the suffix and tagged `garlic32`; anything longer
/// is tagged `garlic64` unchanged. Inputs shorter than 52 chars are never
/// valid destinations.
pub fn destination_to_addr(destination: &str) -> Result<GarlicAddr, AddrError> {
    if destination.len() < SHORT_DEST_LEN {
        return Err(AddrError::TooShort {
            len: destination.len(),
        });
    }

    if destination.len() <= SHORT_FORM_MAX_LEN {
        let value = destination
            .strip_suffix(SHORT_DEST_SUFFIX)
            .unwrap_or(destination);
        if value.len() != SHORT_DEST_LEN {
            return Err(AddrError::Malformed(format!(
                "short-form destination must be {SHORT_DEST_LEN} chars once the suffix is \
                 removed, got {}",
                value.len()
            )));
        }
        return Ok(GarlicAddr::new(Component::Garlic32(value.to_owned())));
    }

    Ok(GarlicAddr::new(Component::Garlic64(destination.to_owned())))
}

/// Convert a structured address back into a native destination string.
///
/// The address must consist of exactly one protocol component. Short-form
/// values get the `.b32.i2p` suffix re-appended; long-form values are
/// returned unchanged.
pub fn addr_to_destination(addr: &GarlicAddr) -> Result<String, AddrError> {
    let component = addr.single().ok_or(AddrError::ProtocolCount {
        count: addr.len(),
    })?;

    match component {
        Component::Garlic32(value) => Ok(format!("{value}{SHORT_DEST_SUFFIX}")),
        Component::Garlic64(value) => Ok(value.clone()),
        Component::Tcp(_) => Err(AddrError::NotADestination {
            tag: component.tag(),
        }),
    }
}

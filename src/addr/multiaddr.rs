//! Structured multi-protocol address type.

use std::fmt;
use std::str::FromStr;

use crate::core::{AddrError, ProtocolTag, SHORT_DEST_LEN, SHORT_FORM_MAX_LEN};

/// One (protocol-tag, value) pair of a structured address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Long-form, self-describing destination string.
    Garlic64(String),
    /// Short-form 52-character destination hash, suffix removed.
    Garlic32(String),
    /// Legacy stream-transport port. Never dialed by this transport.
    Tcp(u16),
}

impl Component {
    /// The component's protocol tag.
    pub fn tag(&self) -> ProtocolTag {
        match self {
            Component::Garlic64(_) => ProtocolTag::Garlic64,
            Component::Garlic32(_) => ProtocolTag::Garlic32,
            Component::Tcp(_) => ProtocolTag::Tcp,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Garlic64(value) => write!(f, "/garlic64/{value}"),
            Component::Garlic32(value) => write!(f, "/garlic32/{value}"),
            Component::Tcp(port) => write!(f, "/tcp/{port}"),
        }
    }
}

/// A structured multi-protocol address: an ordered sequence of
/// (protocol-tag, value) components.
///
/// The outer stack uses this form to describe any transport's endpoints
/// uniformly. A valid *dialable* garlic address has exactly one component,
/// tagged [`ProtocolTag::Garlic64`] or [`ProtocolTag::Garlic32`]; see
/// [`GarlicAddr::is_destination`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GarlicAddr {
    components: Vec<Component>,
}

impl GarlicAddr {
    /// Address consisting of a single component.
    pub fn new(component: Component) -> Self {
        Self {
            components: vec![component],
        }
    }

    /// Address built from an ordered component sequence.
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// The ordered components.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the address has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The sole component, if the address has exactly one.
    pub fn single(&self) -> Option<&Component> {
        match self.components.as_slice() {
            [one] => Some(one),
            _ => None,
        }
    }

    /// Whether this address is a single garlic destination component, i.e.
    /// something this transport can dial or listen on.
    pub fn is_destination(&self) -> bool {
        self.single()
            .map(|component| component.tag().is_destination())
            .unwrap_or(false)
    }
}

impl fmt::Display for GarlicAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            component.fmt(f)?;
        }
        Ok(())
    }
}

impl FromStr for GarlicAddr {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('/')
            .ok_or_else(|| AddrError::Malformed(format!("address must begin with '/': {s:?}")))?;

        let mut parts = rest.split('/');
        let mut components = Vec::new();

        while let Some(tag) = parts.next() {
            let value = parts
                .next()
                .ok_or_else(|| AddrError::Malformed(format!("missing value for protocol {tag:?}")))?;
            components.push(parse_component(tag, value)?);
        }

        if components.is_empty() {
            return Err(AddrError::Malformed("empty address".into()));
        }
        Ok(Self { components })
    }
}

fn parse_component(tag: &str, value: &str) -> Result<Component, AddrError> {
    match tag {
        "garlic64" => {
            if value.len() <= SHORT_FORM_MAX_LEN {
                return Err(AddrError::Malformed(format!(
                    "garlic64 value too short to be a long-form destination: {} chars",
                    value.len()
                )));
            }
            Ok(Component::Garlic64(value.to_owned()))
        }
        "garlic32" => {
            if value.len() != SHORT_DEST_LEN {
                return Err(AddrError::Malformed(format!(
                    "garlic32 value must be exactly {SHORT_DEST_LEN} chars, got {}",
                    value.len()
                )));
            }
            Ok(Component::Garlic32(value.to_owned()))
        }
        "tcp" => {
            let port = value
                .parse::<u16>()
                .map_err(|_| AddrError::Malformed(format!("invalid tcp port {value:?}")))?;
            Ok(Component::Tcp(port))
        }
        other => Err(AddrError::Malformed(format!("unknown protocol {other:?}"))),
    }
}

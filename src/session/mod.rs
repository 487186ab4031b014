//! Garlic Transport - Overlay session seam
//!
//! Trait rendition of the external overlay session client: session creation,
//! tunnel dialing and listening, keepalive, and key management all live on
//! the other side of these traits. The transport consumes them and never
//! looks inside a destination or a key.

mod identity;
mod options;
mod traits;

pub use identity::SessionIdentity;
pub use options::SessionOptions;
pub use traits::{PrimarySession, RawListener, SessionClient, SubSession, SubSessionScope};

// The seam's error type lives in the shared taxonomy.
pub use crate::core::SessionError;

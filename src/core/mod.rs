//! Garlic Transport - Core types
//!
//! Foundation shared by every other module: protocol constants, the error
//! taxonomy, and the transport capability contract.

mod constants;
mod error;
mod traits;

pub use constants::*;
pub use error::*;
pub use traits::*;

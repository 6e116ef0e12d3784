//! plugin-two Host Contract
//!
//! Provides the interface between the plugin and the platform that loads
//! it:
//! - `Host`: resource loading and framework accoutering capabilities
//! - `ResourceKind`: the closed set of loadable resource categories
//! - `HostError`: failures reported by the host's subsystems

mod kind;
mod traits;

pub use kind::ResourceKind;
pub use traits::{Host, HostError};

/// Re-export core types for host implementors
pub mod prelude {
    pub use crate::{Host, HostError, ResourceKind};
    pub use plugin_two_core::prelude::*;
}

//! Runtime module - the demo host around the editor core
//!
//! - `host` - message channel, completion worker and state printing
//! - `input` - stdin intent to message mapping

pub mod host;
pub mod input;

pub use host::Host;

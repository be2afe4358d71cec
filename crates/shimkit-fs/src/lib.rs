//! Filesystem primitives used by the shim registry.
//!
//! Writes go to a hidden sibling temp file first and are renamed into place,
//! so a reader never sees a half-written record or stub.

mod error;
pub mod permissions;
mod rw;

pub use error::{Error, Result};
pub use permissions::PermissionMode;
pub use rw::{Options, atomic_read, atomic_read_to_string, atomic_write};

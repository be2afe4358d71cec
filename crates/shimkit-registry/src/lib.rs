//! Shim registry.
//!
//! A shim named `N` is two files in the registry directory:
//!
//! - `N.shim`, a two-line data record naming the target and its fixed arguments;
//! - `N` plus the executable suffix (`N.exe` on Windows), a copy of a pre-built
//!   stub that reads the record at launch and forwards to the target.
//!
//! The registry only maintains these pairs. Where the stub bytes come from is
//! the [`StubProvisioner`]'s business, and how fixed arguments are joined is
//! the [`ArgQuoter`]'s.
//!
//! # Example
//!
//! ```no_run
//! use shimkit_registry::{BytesStub, Registry, RegistryLayout};
//! use shimkit_platform::HostQuoter;
//!
//! let layout = RegistryLayout::new("/opt/shims");
//! let registry = Registry::new(layout, BytesStub::new(b"stub".to_vec()), HostQuoter);
//!
//! registry.add("build", "/usr/bin/make", &["-j4".to_string()])?;
//! for name in registry.list()? {
//!     println!("{}", name?);
//! }
//! # Ok::<(), shimkit_registry::Error>(())
//! ```

pub use error::{Error, ErrorKind, Result};
pub use layout::RegistryLayout;
pub use name::ShimName;
pub use record::{DataRecord, RecordError, ShimRecord};
pub use registry::{Registry, Shims};
pub use shimkit_platform::ArgQuoter;
pub use stub::{BytesStub, FileStub, StubProvisioner};

mod error;
mod layout;
mod name;
mod record;
mod registry;
mod stub;

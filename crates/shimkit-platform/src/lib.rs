pub mod dir;
pub mod quote;

pub use quote::{ArgQuoter, HostQuoter, PosixQuoter, WindowsQuoter};

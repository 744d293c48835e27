//! Language-specific abstractions.

mod naming;

pub use naming::NamingConvention;

//! PHP AST builders for declarations, methods, parameters and imports.
//!
//! These provide a high-level API for constructing PHP syntax,
//! which is rendered through `CodeBuilder` via the `Renderable` trait.

mod declaration;
mod method;
mod param;
mod uses;
mod visibility;

pub use declaration::{Declaration, ReturnType, render_return_type};
pub use method::Method;
pub use param::{Param, Promotion};
pub use uses::UseRegistry;
pub use visibility::Visibility;

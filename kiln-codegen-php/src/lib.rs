//! PHP code generator for the kiln scaffolding tool.
//!
//! This crate models PHP declarations, methods and whole class files as
//! plain builder values and renders them as PSR-12 formatted source.
//!
//! # Usage
//!
//! ```
//! use kiln_codegen_php::{PhpFile, ast::{Method, Param}};
//!
//! let code = PhpFile::class("Admin\\Book\\InputFilter\\Input", "ConfirmDeleteBookInput")
//!     .use_class("Laminas\\InputFilter\\Input")
//!     .extends("Input")
//!     .add_method(
//!         Method::constructor()
//!             .param(Param::typed("name", "string").nullable().default("null"))
//!             .body_line("parent::__construct($name);"),
//!     )
//!     .render();
//!
//! assert!(code.contains("        ?string $name = null,\n    ) {\n"));
//! ```
//!
//! # Generated Output
//!
//! The [`files`] module scaffolds the artifacts of a Laminas module:
//!
//! - `InputFilter/Input/{Name}Input.php` - a required, trimmed input
//! - `InputFilter/Input/ConfirmDelete{Name}Input.php` - a delete confirmation input
//! - `InputFilter/{Name}InputFilter.php` - an input filter holding inputs
//! - `Service/{Name}ServiceInterface.php` - the service contract
//! - `Service/{Name}Service.php` - the service implementation

mod literal;
mod php_file;

pub mod ast;
pub mod files;
pub mod naming;

pub use ast::{Declaration, Method, Param, ReturnType, UseRegistry, Visibility};
pub use literal::string_literal;
pub use naming::{NameError, PHP_NAMING, validate_artifact_name, validate_namespace};
pub use php_file::{PhpFile, TypeKind};

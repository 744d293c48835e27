//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod init;
mod list;
mod make;
mod output;

pub use init::InitReport;
pub use list::ListReport;
pub use make::{MakeOutcome, MakeReport};
pub use output::{Report, TerminalOutput};

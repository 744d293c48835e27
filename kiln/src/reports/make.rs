//! Make command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};
use crate::ops::make::Plan;

/// What happened to the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakeOutcome {
    Written,
    Overwritten,
    /// The file appeared between the check and the write.
    Skipped,
    /// `--dry-run`: rendered, not written.
    Previewed,
    /// The user declined the confirmation.
    Aborted,
}

/// Report data from scaffolding one artifact.
#[derive(Debug)]
pub struct MakeReport {
    pub kind: &'static str,
    pub fqcn: String,
    pub path: PathBuf,
    pub content: String,
    pub outcome: MakeOutcome,
}

impl MakeReport {
    pub fn new(plan: Plan, outcome: MakeOutcome) -> Self {
        Self {
            kind: plan.kind.name(),
            fqcn: plan.fqcn,
            path: plan.path,
            content: plan.content,
            outcome,
        }
    }
}

impl Report for MakeReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.outcome {
            MakeOutcome::Written => {
                out.section(&format!("Created {}", self.kind));
                out.added_item(&path);
                out.key_value("class", &self.fqcn);
            }
            MakeOutcome::Overwritten => {
                out.section(&format!("Overwrote {}", self.kind));
                out.added_item(&path);
                out.key_value("class", &self.fqcn);
            }
            MakeOutcome::Skipped => {
                out.warning(&format!("{} already exists, nothing written", path));
            }
            MakeOutcome::Previewed => {
                out.divider(&path);
                // content already ends with a newline
                out.preformatted(self.content.trim_end());
                out.divider("end");
            }
            MakeOutcome::Aborted => {
                out.preformatted(&format!("Aborted, {} was not written.", path));
            }
        }
    }
}

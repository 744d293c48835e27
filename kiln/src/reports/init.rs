//! Init command report data structures.

use std::path::PathBuf;

use kiln_core::WriteResult;

use super::output::{Output, Report};

/// Report data from writing a kiln.toml.
#[derive(Debug)]
pub struct InitReport {
    pub path: PathBuf,
    pub namespace: String,
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.result {
            WriteResult::Skipped => {
                out.warning(&format!(
                    "{} already exists, pass --force to replace it",
                    path
                ));
            }
            WriteResult::Written | WriteResult::Overwritten => {
                out.section("Created");
                out.added_item(&path);
                out.key_value("namespace", &self.namespace);
                out.newline();
                out.section("Next steps");
                out.list_item("kiln make service <Name> --module <Module>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: WriteResult) -> InitReport {
        InitReport {
            path: PathBuf::from("kiln.toml"),
            namespace: "Admin".to_string(),
            result,
        }
    }

    #[test]
    fn test_created() {
        let mut out = BufferOutput::default();
        report(WriteResult::Written).render(&mut out);
        assert_eq!(out.lines[0], "Created:");
        assert_eq!(out.lines[1], "  + kiln.toml");
        assert_eq!(out.lines[2], "namespace: Admin");
    }

    #[test]
    fn test_skipped_is_a_warning() {
        let mut out = BufferOutput::default();
        report(WriteResult::Skipped).render(&mut out);
        assert_eq!(
            out.text(),
            "warning: kiln.toml already exists, pass --force to replace it"
        );
    }
}

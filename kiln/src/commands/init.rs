use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};
use kiln_codegen_php::validate_namespace;
use kiln_core::GeneratedFile;
use kiln_manifest::ManifestTemplate;
use tracing::info;

use crate::{
    prompt::{DialoguerPrompter, Prompter},
    reports::{InitReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Root namespace of the application, e.g. Admin (prompted when omitted)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Directory holding the application modules
    #[arg(long, default_value = "src")]
    pub source_dir: String,

    /// Do not emit declare(strict_types=1) in generated files
    #[arg(long)]
    pub no_strict_types: bool,

    /// Directory to write kiln.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Replace an existing kiln.toml
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = self.execute(&mut DialoguerPrompter::new())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn execute(&self, prompter: &mut dyn Prompter) -> Result<InitReport> {
        let namespace = match &self.namespace {
            Some(namespace) => namespace.clone(),
            None => prompter.input("Root namespace")?,
        };
        let namespace = namespace.trim().trim_matches('\\').to_string();
        validate_namespace(&namespace)
            .map_err(|e| eyre!("invalid namespace '{}': {}", namespace, e))?;

        let template = ManifestTemplate::new(namespace.as_str())
            .with_source_dir(self.source_dir.as_str())
            .with_strict_types(!self.no_strict_types)
            .force(self.force);
        let path = template.path(&self.output);
        let result = template.write(&self.output)?;
        info!(path = %path.display(), ?result, "init finished");

        Ok(InitReport {
            path,
            namespace,
            result,
        })
    }
}

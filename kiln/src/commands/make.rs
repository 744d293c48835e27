use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, eyre};
use kiln_manifest::{KilnToml, MANIFEST_FILE};

use super::{UnwrapOrExit, exit_with_diagnostic};
use crate::{
    artifact::ArtifactKind,
    ops::make::{self, MakeError, MakeOptions},
    prompt::{DialoguerPrompter, Prompter},
    reports::{MakeReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct MakeCommand {
    /// Kind of artifact to generate (prompted when omitted)
    #[arg(value_enum)]
    pub kind: Option<ArtifactKind>,

    /// Artifact name, e.g. Book (prompted when omitted)
    pub name: Option<String>,

    /// Module the artifact belongs to (prompted when omitted)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Path to kiln.toml (defaults to the nearest one above the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Write without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl MakeCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        match self.execute(&mut DialoguerPrompter::new(), &cwd) {
            Ok(report) => {
                report.render(&mut TerminalOutput::new());
                Ok(())
            }
            Err(err) => match err.downcast::<MakeError>() {
                Ok(err) => exit_with_diagnostic(err),
                Err(err) => Err(err),
            },
        }
    }

    fn execute(&self, prompter: &mut dyn Prompter, cwd: &Path) -> Result<MakeReport> {
        let config = self
            .config
            .clone()
            .or_else(|| KilnToml::discover(cwd))
            .unwrap_or_else(|| cwd.join(MANIFEST_FILE));
        let kiln_toml = KilnToml::open(&config).unwrap_or_exit();

        let kind = match self.kind {
            Some(kind) => kind,
            None => {
                let names: Vec<&str> = ArtifactKind::ALL.iter().map(|k| k.name()).collect();
                let index = prompter.select("Artifact kind", &names)?;
                ArtifactKind::ALL
                    .get(index)
                    .copied()
                    .ok_or_else(|| eyre!("no artifact kind at index {}", index))?
            }
        };
        let name = match &self.name {
            Some(name) => name.clone(),
            None => prompter.input("Name")?,
        };
        let module = match &self.module {
            Some(module) => module.clone(),
            None => prompter.input("Module")?,
        };

        let opts = MakeOptions {
            root: kiln_toml.root(),
            force: self.force,
        };
        let plan = make::prepare(kiln_toml.manifest(), kind, &name, &module, &opts)?;

        if self.dry_run {
            return Ok(make::preview(plan));
        }
        if !self.yes && !prompter.confirm(&format!("Write {}?", plan.path.display()), true)? {
            return Ok(make::abort(plan));
        }

        Ok(make::write(plan)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{
        prompt::testing::{Answer, ScriptedPrompter},
        reports::MakeOutcome,
    };

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(MANIFEST_FILE),
            "[project]\nnamespace = \"Admin\"\n",
        )
        .unwrap();
        tmp
    }

    fn command() -> MakeCommand {
        MakeCommand {
            kind: None,
            name: None,
            module: None,
            config: None,
            force: false,
            dry_run: false,
            yes: false,
        }
    }

    #[test]
    fn test_prompts_for_everything_missing() {
        let tmp = project();
        let mut prompter = ScriptedPrompter::new([
            Answer::Pick(4),
            Answer::Text("book".to_string()),
            Answer::Text("Book".to_string()),
            Answer::Yes,
        ]);

        let report = command().execute(&mut prompter, tmp.path()).unwrap();

        let target = tmp.path().join("src/Book/src/Service/BookService.php");
        assert_eq!(report.outcome, MakeOutcome::Written);
        assert_eq!(report.path, target);
        assert_eq!(report.fqcn, "Admin\\Book\\Service\\BookService");
        assert_eq!(&prompter.prompts[..3], ["Artifact kind", "Name", "Module"]);
        assert_eq!(prompter.prompts[3], format!("Write {}?", target.display()));
        assert!(target.is_file());
    }

    #[test]
    fn test_declined_confirmation_writes_nothing() {
        let tmp = project();
        let cmd = MakeCommand {
            kind: Some(ArtifactKind::Input),
            name: Some("Title".to_string()),
            module: Some("Book".to_string()),
            ..command()
        };
        let mut prompter = ScriptedPrompter::new([Answer::No]);

        let report = cmd.execute(&mut prompter, tmp.path()).unwrap();

        assert_eq!(report.outcome, MakeOutcome::Aborted);
        assert!(!report.path.exists());
    }

    #[test]
    fn test_dry_run_skips_confirmation() {
        let tmp = project();
        let cmd = MakeCommand {
            kind: Some(ArtifactKind::InputFilter),
            name: Some("Book".to_string()),
            module: Some("Book".to_string()),
            dry_run: true,
            ..command()
        };
        let mut prompter = ScriptedPrompter::default();

        let report = cmd.execute(&mut prompter, tmp.path()).unwrap();

        assert_eq!(report.outcome, MakeOutcome::Previewed);
        assert!(report.content.contains("class BookInputFilter extends InputFilter"));
        assert!(prompter.prompts.is_empty());
        assert!(!tmp.path().join("src").exists());
    }

    #[test]
    fn test_discovers_manifest_from_subdirectory() {
        let tmp = project();
        let nested = tmp.path().join("public/assets");
        std::fs::create_dir_all(&nested).unwrap();
        let cmd = MakeCommand {
            kind: Some(ArtifactKind::ServiceInterface),
            name: Some("Book".to_string()),
            module: Some("Book".to_string()),
            yes: true,
            ..command()
        };

        let report = cmd
            .execute(&mut ScriptedPrompter::default(), &nested)
            .unwrap();

        assert_eq!(
            report.path,
            tmp.path().join("src/Book/src/Service/BookServiceInterface.php")
        );
        assert!(report.path.is_file());
    }

    #[test]
    fn test_existing_file_is_a_make_error() {
        let tmp = project();
        let cmd = MakeCommand {
            kind: Some(ArtifactKind::Input),
            name: Some("Title".to_string()),
            module: Some("Book".to_string()),
            yes: true,
            ..command()
        };
        cmd.execute(&mut ScriptedPrompter::default(), tmp.path())
            .unwrap();

        let err = cmd
            .execute(&mut ScriptedPrompter::default(), tmp.path())
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<MakeError>(),
            Some(MakeError::AlreadyExists { .. })
        ));
    }
}

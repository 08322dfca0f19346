//! `init-kata`: ask about the kata, then create its files.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use kata_adapters::LocalFilesystem;
use kata_core::{
    application::{KataService, ports::Prompter},
    domain::{InitReport, PlannedWrite, Session, WritePlan},
};

use crate::{
    cli::{GlobalArgs, InitArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::select_prompter,
};

/// What a run ended with.
#[derive(Debug)]
enum Outcome {
    Planned { session: Session, plan: WritePlan },
    Applied { session: Session, report: InitReport },
}

/// JSON shape of `--dry-run`: nothing here happened yet.
#[derive(Debug, Serialize)]
struct DryRunReport {
    kata: String,
    dry_run: bool,
    would_create: Vec<String>,
    would_skip: Vec<String>,
    would_update: Vec<String>,
}

#[instrument(skip_all, fields(root = ?args.root, dry_run = args.dry_run))]
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = resolve_root(&args.root())?;
    let layout = config.project_layout(&root)?;
    let service = KataService::new(Box::new(LocalFilesystem::new()), layout);

    output.header("\n\u{1f94b} Init Kata\n")?;

    let prompter = select_prompter(global)?;
    match drive(&service, prompter, args.dry_run)? {
        Outcome::Planned { session, plan } => print_plan(&service, &session, &plan, output),
        Outcome::Applied { session, report } => print_report(&service, &session, &report, output),
    }
}

/// Ask, then write or plan. The prompter is closed exactly once, before
/// any error leaves this function.
fn drive(
    service: &KataService,
    mut prompter: Box<dyn Prompter>,
    dry_run: bool,
) -> CliResult<Outcome> {
    let session = service.collect_session(prompter.as_mut());
    prompter.close();
    let session = session?;

    if dry_run {
        let plan = service.plan(&session);
        debug!(files = plan.len(), "Dry run, nothing written");
        return Ok(Outcome::Planned { session, plan });
    }

    let report = service.apply(&session)?;
    info!(kata = %report.kata, "Kata files written");
    Ok(Outcome::Applied { session, report })
}

/// The root must be an existing directory.
fn resolve_root(root: &Path) -> CliResult<PathBuf> {
    let metadata = std::fs::metadata(root)
        .with_cli_context(|| format!("Cannot access project root '{}'", root.display()))?;

    if !metadata.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("project root '{}' is not a directory", root.display()),
            source: None,
        });
    }
    Ok(root.to_path_buf())
}

fn print_report(
    service: &KataService,
    session: &Session,
    report: &InitReport,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    output.print("")?;
    output.success("Kata initialized!")?;

    let mut created = report.created.clone();
    created.extend(report.updated.iter().map(|label| format!("{label} (updated)")));
    output.list("Created:", &created)?;
    output.list("Skipped (already exist):", &report.skipped)?;

    if report.is_noop() {
        output.warning("Nothing was written; every file already exists")?;
    }

    print_next_steps(service, session, output)
}

fn dry_run_report(
    service: &KataService,
    session: &Session,
    plan: &WritePlan,
) -> CliResult<DryRunReport> {
    let (existing, missing): (Vec<_>, Vec<_>) = plan
        .entries()
        .iter()
        .partition(|step| service.is_present(step));

    let would_update = if session.dom && service.dom_entry_pending()? {
        vec![service.layout().index_html().label()]
    } else {
        Vec::new()
    };

    Ok(DryRunReport {
        kata: session.kata_name.to_string(),
        dry_run: true,
        would_create: labels(&missing),
        would_skip: labels(&existing),
        would_update,
    })
}

fn print_plan(
    service: &KataService,
    session: &Session,
    plan: &WritePlan,
    output: &OutputManager,
) -> CliResult<()> {
    let report = dry_run_report(service, session, plan)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.print("")?;
    output.info("Dry run: nothing was written")?;
    output.list("Would create:", &report.would_create)?;
    output.list("Would skip (already exist):", &report.would_skip)?;
    output.list("Would update:", &report.would_update)?;
    Ok(())
}

fn labels(steps: &[&PlannedWrite]) -> Vec<String> {
    steps.iter().map(|step| step.label()).collect()
}

fn print_next_steps(
    service: &KataService,
    session: &Session,
    output: &OutputManager,
) -> CliResult<()> {
    let source = service
        .layout()
        .source_file(&format!("{}.ts", session.kata_name));

    output.print("")?;
    output.header("Next steps:")?;
    output.print("  1. Run `npm test` to start TDD")?;
    output.print(&format!("  2. Implement your solution in {source}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_adapters::{MemoryFilesystem, ScriptedPrompter, Transcript};
    use kata_core::domain::{COMMENTED_SCRIPT_TAG, ProjectLayout};
    use tempfile::TempDir;

    fn memory_service(fs: &MemoryFilesystem) -> KataService {
        KataService::new(Box::new(fs.clone()), ProjectLayout::new("/project"))
    }

    fn scripted(answers: [&str; 4]) -> (Box<dyn Prompter>, Transcript) {
        let prompter = ScriptedPrompter::new(answers);
        let transcript = prompter.transcript();
        (Box::new(prompter), transcript)
    }

    // ── drive ─────────────────────────────────────────────────────────────

    #[test]
    fn prompter_closed_once_on_success() {
        let fs = MemoryFilesystem::new();
        let (prompter, transcript) = scripted(["fizzbuzz", "", "", "n"]);

        let outcome = drive(&memory_service(&fs), prompter, false).unwrap();

        assert!(matches!(outcome, Outcome::Applied { .. }));
        assert_eq!(transcript.close_count(), 1);
        assert!(fs.read_file("/project/KATA.md").is_some());
    }

    #[test]
    fn prompter_closed_once_on_invalid_kata_name() {
        let fs = MemoryFilesystem::new();
        let (prompter, transcript) = scripted(["FizzBuzz", "", "", "n"]);

        let err = drive(&memory_service(&fs), prompter, false).unwrap_err();

        assert_eq!(err.exit_code(), 1);
        assert_eq!(transcript.close_count(), 1);
        assert_eq!(transcript.questions().len(), 1);
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn prompter_closed_once_on_invalid_function_name() {
        let fs = MemoryFilesystem::new();
        let (prompter, transcript) = scripted(["fizzbuzz", "bad-name", "", "n"]);

        let err = drive(&memory_service(&fs), prompter, false).unwrap_err();

        assert_eq!(err.exit_code(), 1);
        assert_eq!(transcript.close_count(), 1);
        assert_eq!(transcript.questions().len(), 2);
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn dry_run_closes_prompter_and_writes_nothing() {
        let fs = MemoryFilesystem::new();
        let (prompter, transcript) = scripted(["fizzbuzz", "", "", "y"]);

        let outcome = drive(&memory_service(&fs), prompter, true).unwrap();

        assert!(matches!(outcome, Outcome::Planned { .. }));
        assert_eq!(transcript.close_count(), 1);
        assert_eq!(fs.write_count(), 0);
    }

    // ── dry-run report ────────────────────────────────────────────────────

    #[test]
    fn dry_run_report_splits_by_presence() {
        let fs = MemoryFilesystem::new()
            .with_file("/project/KATA.md", "# Notes\n")
            .with_file(
                "/project/index.html",
                format!("<body>{COMMENTED_SCRIPT_TAG}</body>"),
            );
        let service = memory_service(&fs);
        let (prompter, _) = scripted(["fizzbuzz", "", "", "y"]);
        let Outcome::Planned { session, plan } = drive(&service, prompter, true).unwrap() else {
            panic!("expected a plan");
        };

        let report = dry_run_report(&service, &session, &plan).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.would_skip, ["KATA.md"]);
        assert_eq!(
            report.would_create,
            [
                "src/fizzbuzz.ts",
                "src/fizzbuzz.test.ts",
                "src/main.ts",
                "src/style.css"
            ]
        );
        assert_eq!(report.would_update, ["index.html"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dry_run"], true);
        assert!(json.get("created").is_none());
    }

    #[test]
    fn dry_run_without_marker_updates_nothing() {
        let fs = MemoryFilesystem::new().with_file("/project/index.html", "<body></body>");
        let service = memory_service(&fs);
        let (prompter, _) = scripted(["fizzbuzz", "", "", "y"]);
        let Outcome::Planned { session, plan } = drive(&service, prompter, true).unwrap() else {
            panic!("expected a plan");
        };

        let report = dry_run_report(&service, &session, &plan).unwrap();
        assert!(report.would_update.is_empty());
    }

    // ── resolve_root ──────────────────────────────────────────────────────

    #[test]
    fn existing_directory_is_accepted() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_root(dir.path()).unwrap(), dir.path());
    }

    #[test]
    fn missing_root_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = resolve_root(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, CliError::IoError { .. }));
    }

    #[test]
    fn file_root_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("package.json");
        std::fs::write(&file, "{}").unwrap();
        let err = resolve_root(&file).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}

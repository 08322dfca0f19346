//! Kata Service - main application orchestrator.
//!
//! This service coordinates one run of the tool:
//! 1. Ask and validate the kata name, function name, description, DOM flag
//! 2. Render each planned file and safe-write it
//! 3. Optionally enable the DOM entry point in `index.html`
//!
//! It never exits the process. Validation failures come back as errors so
//! the caller can release the prompter before deciding the exit status.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, Prompter},
        services::safe_write::safe_write,
    },
    domain::{
        FunctionName, InitReport, KataName, PlannedWrite, ProjectLayout, Session, WritePlan,
        enable_script_tag, parse_yes,
    },
    error::KataResult,
};

/// Question texts, without the trailing `": "` each prompter adds.
pub struct Prompts;

impl Prompts {
    pub const KATA_NAME: &'static str = r#"Kata name (e.g., "fizzbuzz")"#;
    pub const DESCRIPTION: &'static str = "Description (optional)";
    pub const DOM: &'static str = "Include DOM support? (y/N)";

    pub fn function_name(default: &str) -> String {
        format!(r#"Function name (default: "{default}")"#)
    }
}

/// Main kata service.
pub struct KataService {
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
}

impl KataService {
    /// Create a new kata service writing into `layout`.
    pub fn new(filesystem: Box<dyn Filesystem>, layout: ProjectLayout) -> Self {
        Self { filesystem, layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Ask every question and validate the answers.
    ///
    /// Stops at the first invalid name; later questions are not asked.
    #[instrument(skip_all)]
    pub fn collect_session(&self, prompter: &mut dyn Prompter) -> KataResult<Session> {
        let kata_name = KataName::parse(prompter.ask(Prompts::KATA_NAME)?)?;

        let default_function = kata_name.default_function_name();
        let answer = prompter.ask(&Prompts::function_name(&default_function))?;
        let function_name = if answer.is_empty() {
            FunctionName::parse(default_function)?
        } else {
            FunctionName::parse(answer)?
        };

        let description = prompter.ask(Prompts::DESCRIPTION)?;
        let dom = parse_yes(&prompter.ask(Prompts::DOM)?);

        let session = Session::new(kata_name, function_name, description, dom);
        debug!(
            kata = %session.kata_name,
            function = %session.function_name,
            dom = session.dom,
            "Session collected"
        );
        Ok(session)
    }

    /// Files this session would create, in write order.
    pub fn plan(&self, session: &Session) -> WritePlan {
        WritePlan::for_session(session, &self.layout)
    }

    /// `true` when the step's target already exists and would be skipped.
    pub fn is_present(&self, step: &PlannedWrite) -> bool {
        self.filesystem.exists(&self.layout.resolve(&step.path))
    }

    /// `true` when `index.html` still carries the commented script tag.
    pub fn dom_entry_pending(&self) -> KataResult<bool> {
        let path = self.layout.resolve(self.layout.index_html());
        if !self.filesystem.exists(&path) {
            return Ok(false);
        }
        let html = self.filesystem.read_to_string(&path)?;
        Ok(enable_script_tag(&html).is_some())
    }

    /// Create the session's files and, with DOM support, wire `index.html`.
    ///
    /// Existing files are skipped, so applying the same session twice
    /// changes nothing the second time.
    #[instrument(skip_all, fields(kata = %session.kata_name))]
    pub fn apply(&self, session: &Session) -> KataResult<InitReport> {
        let mut report = InitReport::new(session.kata_name.as_str());

        for step in &self.plan(session) {
            let path = self.layout.resolve(&step.path);
            let content = step.kind.render(session);
            let outcome = safe_write(self.filesystem.as_ref(), &path, &content)?;
            debug!(file = %step.label(), kind = %step.kind, ?outcome, "Planned write done");
            report.record(step.label(), outcome);
        }

        if session.dom {
            self.enable_dom_entry(&mut report)?;
        }

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            updated = report.updated.len(),
            "Kata initialised"
        );
        Ok(report)
    }

    /// Collect answers and apply them.
    pub fn run(&self, prompter: &mut dyn Prompter) -> KataResult<InitReport> {
        let session = self.collect_session(prompter)?;
        self.apply(&session)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Uncomment the script tag in `index.html` if the marker is there.
    fn enable_dom_entry(&self, report: &mut InitReport) -> KataResult<()> {
        let index = self.layout.index_html();
        let path = self.layout.resolve(index);

        if !self.filesystem.exists(&path) {
            warn!(path = %path.display(), "index.html not found, DOM entry point not wired");
            return Ok(());
        }

        let html = self.filesystem.read_to_string(&path)?;
        match enable_script_tag(&html) {
            Some(updated) => {
                self.filesystem.write_file(&path, &updated)?;
                info!(path = %path.display(), "Script tag enabled");
                report.record_update(index.label());
            }
            None => debug!(path = %path.display(), "Script tag marker not found"),
        }

        Ok(())
    }
}

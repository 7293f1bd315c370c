//! Charm-style CLI prompts using cliclack

use crate::catalog::{AxisOption, Language, RouterForm, Selection, Styling};
use crate::error::{Outcome, ScaffoldError};
use crate::product::ProductConfig;
use crate::resolve::{validate_project_name, Confirmation, Notice, CURRENT_DIR_SENTINEL};
use crate::templates::{check_compatibility, RootManifest, TemplateSource};
use crate::workflow::{self, CreateRequest, CreatedProject, Progress, Prompter, TemplateChoice};
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, or `.` for the current directory
    pub project_name: Option<String>,

    /// Explicit template identifier (skips the axis prompts)
    pub template: Option<String>,

    /// Preset language key
    pub language: Option<String>,

    /// Preset router/form key
    pub router_form: Option<String>,

    /// Preset styling key
    pub styling: Option<String>,

    /// Local directory to use as the templates root
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
///
/// A declined confirmation or an interrupted prompt ends the run as
/// [`Outcome::Cancelled`].
pub async fn run<C: ProductConfig>(
    config: &C,
    args: CreateArgs,
    cli_version: &str,
) -> Result<Outcome<()>> {
    match create(config, &args, cli_version).await {
        Ok(Outcome::Completed(())) => Ok(Outcome::Completed(())),
        Ok(Outcome::Cancelled) => {
            cliclack::outro_cancel("Operation cancelled.")?;
            Ok(Outcome::Cancelled)
        }
        Err(e) if is_interrupt(&e) => {
            cliclack::outro_cancel("Operation cancelled.")?;
            Ok(Outcome::Cancelled)
        }
        Err(e) => Err(e),
    }
}

async fn create<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
    cli_version: &str,
) -> Result<Outcome<()>> {
    cliclack::intro(format!("{} v{}", config.display_name(), cli_version))?;

    // Step 1: Locate templates
    let source = setup_source(config, args, cli_version).await?;

    // Step 2: Project name
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let project_name = select_project_name(args)?;
    if let Some(message) = current_dir_notice(&project_name, &cwd) {
        cliclack::log::info(message)?;
    }

    // Step 3: Template (explicit or per axis)
    let template = select_template(args)?;

    let request = CreateRequest {
        project_name,
        template,
        cwd,
    };

    // Step 4: Resolve, materialize, patch the manifest
    let mut prompter = TuiPrompter::new(args.yes);
    match workflow::run(&request, &source, &mut prompter).await {
        Ok(Outcome::Completed(created)) => {
            print_next_steps(config, &created)?;
            Ok(Outcome::Completed(()))
        }
        Ok(Outcome::Cancelled) => Ok(Outcome::Cancelled),
        Err(e) => {
            prompter.fail();
            Err(e.into())
        }
    }
}

/// Whether an error came from the user interrupting a prompt (Esc / Ctrl+C)
fn is_interrupt(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == ErrorKind::Interrupted)
    })
}

/// Message naming the project when `.` picks the working directory
fn current_dir_notice(project_name: &str, cwd: &Path) -> Option<String> {
    if project_name != CURRENT_DIR_SENTINEL {
        return None;
    }
    let name = cwd.file_name()?.to_string_lossy();
    Some(format!("Using current directory name: {}", name))
}

/// Full compatibility warning, including the upgrade command
fn version_warning<C: ProductConfig>(
    config: &C,
    cli_version: &str,
    manifest: &RootManifest,
) -> Option<String> {
    let version = manifest.version.as_deref()?;
    check_compatibility(cli_version, version, config.upgrade_command())
        .map(|warning| format!("Version warning: {}", warning))
}

async fn setup_source<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
    cli_version: &str,
) -> Result<TemplateSource> {
    if let Some(path) = &args.template_dir {
        cliclack::log::info(format!("Using local templates from {}", path.display()))?;
    }
    let source = TemplateSource::from_config(config, args.template_dir.clone())?;
    tracing::debug!(product = config.name(), root = %source.root().display(), "templates located");

    if let Some(root_manifest) = source.root_manifest().await {
        if let Some(warning) = version_warning(config, cli_version, &root_manifest) {
            cliclack::log::warning(warning)?;
        }
        let missing =
            root_manifest.missing(crate::catalog::TEMPLATES.iter().map(|entry| entry.key));
        if !missing.is_empty() {
            tracing::debug!(?missing, "templates not listed in root manifest");
        }
    }

    Ok(source)
}

fn select_project_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.project_name {
        validate_project_name(name)?;
        return Ok(name.trim().to_string());
    }

    if args.yes {
        return Err(ScaffoldError::invalid_input(
            "Project name is required in non-interactive mode",
        )
        .into());
    }

    let name: String = cliclack::input("What is your project name? (use '.' for current directory)")
        .placeholder("my-app")
        .validate(|input: &String| validate_project_name(input).map_err(|e| prompt_message(&e)))
        .interact()?;

    Ok(name.trim().to_string())
}

fn select_template(args: &CreateArgs) -> Result<TemplateChoice> {
    if let Some(template) = &args.template {
        return Ok(TemplateChoice::Explicit(template.clone()));
    }

    let language: Language =
        select_axis(args.language.as_deref(), "Choose your language", args.yes)?;
    let router_form: RouterForm = select_axis(
        args.router_form.as_deref(),
        "Choose your routing and form handling",
        args.yes,
    )?;
    let styling: Styling =
        select_axis(args.styling.as_deref(), "Choose your styling approach", args.yes)?;

    let selection = Selection::new(language, router_form, styling);
    cliclack::note(
        "Selected configuration",
        format!(
            "Language: {}\nRouter + Forms: {}\nStyling: {}\nTemplate: {}",
            language,
            router_form,
            styling,
            selection.key()
        ),
    )?;

    Ok(TemplateChoice::Axes(selection))
}

/// Preset key, default (non-interactive), or prompt
fn select_axis<T: AxisOption>(preset: Option<&str>, prompt: &str, yes: bool) -> Result<T> {
    if let Some(key) = preset {
        return Ok(T::from_key(key.trim())?);
    }
    if yes {
        return Ok(T::all()[0]);
    }

    let mut select = cliclack::select(prompt);
    for option in T::all() {
        select = select.item(*option, option.display_name(), option.description());
    }
    Ok(select.interact()?)
}

fn prompt_message(err: &ScaffoldError) -> String {
    match err {
        ScaffoldError::InvalidInput { message } => message.clone(),
        other => other.to_string(),
    }
}

/// Answers target questions with cliclack and shows progress with a spinner
struct TuiPrompter {
    yes: bool,
    spinner: Option<cliclack::ProgressBar>,
    project_name: String,
}

impl TuiPrompter {
    fn new(yes: bool) -> Self {
        Self {
            yes,
            spinner: None,
            project_name: String::new(),
        }
    }

    /// Stop a running spinner after a failed step
    fn fail(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop("Failed to create project");
        }
    }
}

impl Prompter for TuiPrompter {
    fn confirm(&mut self, request: &Confirmation) -> crate::error::Result<bool> {
        if self.yes {
            let message = format!("{} yes (--yes)", request.message());
            let logged = if request.is_destructive() {
                cliclack::log::warning(message)
            } else {
                cliclack::log::info(message)
            };
            logged.map_err(prompt_failed)?;
            return Ok(true);
        }

        let answer = cliclack::confirm(request.message())
            .initial_value(request.default_answer())
            .interact();
        declined_on_interrupt(answer)
    }

    fn notice(&mut self, notice: &Notice) -> crate::error::Result<()> {
        cliclack::log::warning(&notice.message).map_err(prompt_failed)
    }

    fn progress(&mut self, event: Progress<'_>) -> crate::error::Result<()> {
        match event {
            Progress::Materializing { resolution, target } => {
                self.project_name = target.project_name.clone();
                let spinner = cliclack::spinner();
                spinner.start(format!(
                    "Creating {} with {} template...",
                    target.project_name, resolution.template.name
                ));
                self.spinner = Some(spinner);
            }
            Progress::Materialized { report } => {
                tracing::debug!(files = report.files.len(), "materialized");
            }
            Progress::ManifestUpdated { .. } => {
                if let Some(spinner) = self.spinner.take() {
                    spinner.stop(format!("Project {} created successfully!", self.project_name));
                }
            }
        }
        Ok(())
    }
}

/// Esc / Ctrl+C at a confirmation counts as "no"
fn declined_on_interrupt(answer: std::io::Result<bool>) -> crate::error::Result<bool> {
    match answer {
        Err(e) if e.kind() == ErrorKind::Interrupted => Ok(false),
        other => other.map_err(prompt_failed),
    }
}

fn prompt_failed(err: std::io::Error) -> ScaffoldError {
    ScaffoldError::io("Prompt failed", err)
}

fn print_next_steps<C: ProductConfig>(config: &C, created: &CreatedProject) -> Result<()> {
    let steps = config.next_steps(&created.target);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

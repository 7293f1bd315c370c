//! create-gsp - Create a new React application from GSP templates

use clap::Parser;
use colored::Colorize;
use gsp_core::catalog::TEMPLATES;
use gsp_core::tui::CreateArgs;
use gsp_core::{Outcome, ProductConfig, ScaffoldError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the diagnostic log filter
const LOG_ENV: &str = "CREATE_GSP_LOG";

/// GSP product configuration
#[derive(Clone)]
pub struct GspConfig;

impl ProductConfig for GspConfig {
    fn name(&self) -> &'static str {
        "create-gsp"
    }

    fn display_name(&self) -> &'static str {
        "GSP React Template Creator"
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_GSP_TEMPLATE_DIR"
    }

    fn bundled_template_dir(&self) -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates"))
    }

    fn cli_description(&self) -> &'static str {
        "Create a new React application with GSP template"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-gsp --force"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-gsp")]
#[command(about = "Create a new React application with GSP template")]
#[command(version)]
pub struct Args {
    /// Name of the project ('.' for the current directory)
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Template variant to use (e.g. typescript-tailwind)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Language: javascript or typescript
    #[arg(long)]
    pub language: Option<String>,

    /// Routing and form stack: router-formik or router-rhf
    #[arg(long = "router-form")]
    pub router_form: Option<String>,

    /// Styling: vanilla, tailwind or shadcn
    #[arg(long)]
    pub styling: Option<String>,

    /// Local directory to use for templates (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            template: args.template,
            language: args.language,
            router_form: args.router_form,
            styling: args.styling,
            template_dir: args.template_dir,
            yes: args.yes,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Process exit status for a finished run; cancellation is not a failure
fn exit_status(result: &anyhow::Result<Outcome<()>>) -> u8 {
    match result {
        Ok(Outcome::Completed(())) | Ok(Outcome::Cancelled) => 0,
        Err(_) => 1,
    }
}

/// `- key: description` lines for every registered template
fn template_listing() -> String {
    TEMPLATES
        .iter()
        .map(|entry| format!("  - {}: {}", entry.key, entry.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "❌ Error creating project:".red(), err);

    if let Some(ScaffoldError::UnknownTemplate { .. }) = err.downcast_ref::<ScaffoldError>() {
        eprintln!("{}", "Available templates:".yellow());
        eprintln!("{}", template_listing());
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();
    let config = GspConfig;

    let result = gsp_core::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = &result {
        report_error(err);
    }
    ExitCode::from(exit_status(&result))
}

//! GSP Core - selection resolution and materialization engine for create-gsp
//!
//! Given a project name and a set of feature selections, this library picks
//! a template, decides where the project goes, copies the template tree
//! there and patches the copied `package.json`.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Reference data** - static option catalog and template registry ([`catalog`])
//! - **Layer 2: Core operations** - selection and target resolution ([`resolve`]),
//!   template copying ([`templates`]), manifest transformation ([`manifest`])
//! - **Layer 3: Workflow orchestration** - [`workflow::run`] plus the [`Prompter`] seam
//! - **Layer 4: CLI/TUI interface** - optional cliclack-based prompts (feature-gated)
//!
//! The core never prompts by itself. Target resolution returns decision
//! points that a [`Prompter`] answers, so every step can be driven from
//! tests without a terminal.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use gsp_core::catalog::{Language, RouterForm, Selection, Styling};
//! use gsp_core::workflow::{self, CreateRequest, TemplateChoice};
//! use gsp_core::templates::TemplateSource;
//!
//! let request = CreateRequest {
//!     project_name: "my-app".into(),
//!     template: TemplateChoice::Axes(Selection::new(
//!         Language::TypeScript,
//!         RouterForm::Formik,
//!         Styling::Tailwind,
//!     )),
//!     cwd: std::env::current_dir()?,
//! };
//! let source = TemplateSource::local("templates");
//! let outcome = workflow::run(&request, &source, &mut my_prompter).await?;
//! ```

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod product;
pub mod resolve;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{AxisOption, Language, RouterForm, Selection, Styling, TemplateEntry};
pub use error::{Outcome, Result, ScaffoldError};
pub use product::ProductConfig;
pub use resolve::{Confirmation, ProjectTarget, Resolution};
pub use templates::TemplateSource;
pub use workflow::{CreateRequest, Prompter, TemplateChoice};

#[cfg(feature = "tui")]
pub use tui::run;

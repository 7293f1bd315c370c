//! End-to-end project creation
//!
//! Runs selection resolution, target resolution, materialization and the
//! manifest transform in that order. The first error stops the run; a
//! declined confirmation ends it as [`Outcome::Cancelled`] before anything
//! is written.

use crate::catalog::Selection;
use crate::error::{Outcome, Result};
use crate::manifest::transform_manifest;
use crate::resolve::{
    resolve_choices, resolve_explicit, resolve_target, Confirmation, Notice, ProjectTarget,
    Resolution, TargetStep,
};
use crate::templates::{copy_template, CopyReport, TemplateSource};
use std::path::PathBuf;

/// How the template was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    /// `--template <identifier>`
    Explicit(String),
    /// One option per axis
    Axes(Selection),
}

/// Everything a run needs from the caller
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Raw project name, possibly `.`
    pub project_name: String,
    pub template: TemplateChoice,
    /// Absolute working directory
    pub cwd: PathBuf,
}

/// Milestones reported while a run progresses
#[derive(Debug)]
pub enum Progress<'a> {
    Materializing {
        resolution: &'a Resolution,
        target: &'a ProjectTarget,
    },
    Materialized {
        report: &'a CopyReport,
    },
    ManifestUpdated {
        path: &'a std::path::Path,
    },
}

/// Supplies user decisions and receives user-visible messages
pub trait Prompter {
    /// Answer a yes/no question raised by target resolution
    fn confirm(&mut self, request: &Confirmation) -> Result<bool>;

    /// Show a notice (e.g. a template substitution)
    fn notice(&mut self, notice: &Notice) -> Result<()>;

    /// Observe progress; ignored by default
    fn progress(&mut self, _event: Progress<'_>) -> Result<()> {
        Ok(())
    }
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct CreatedProject {
    pub resolution: Resolution,
    pub target: ProjectTarget,
    pub report: CopyReport,
    pub manifest_path: PathBuf,
}

/// Map the caller's template choice onto a registry entry
pub fn resolve_template(choice: &TemplateChoice) -> Result<Resolution> {
    match choice {
        TemplateChoice::Explicit(key) => resolve_explicit(key),
        TemplateChoice::Axes(selection) => resolve_choices(*selection),
    }
}

/// Walk the target resolver's decision points until it is ready or declined
pub fn settle_target(
    raw_name: &str,
    cwd: &std::path::Path,
    prompter: &mut impl Prompter,
) -> Result<Outcome<ProjectTarget>> {
    let mut step = resolve_target(raw_name, cwd)?;
    loop {
        match step {
            TargetStep::Ready(target) => return Ok(Outcome::Completed(target)),
            TargetStep::Confirm(pending) => {
                let accepted = prompter.confirm(pending.request())?;
                match pending.answer(accepted)? {
                    Outcome::Completed(next) => step = next,
                    Outcome::Cancelled => return Ok(Outcome::Cancelled),
                }
            }
        }
    }
}

/// Create a project
pub async fn run(
    request: &CreateRequest,
    source: &TemplateSource,
    prompter: &mut impl Prompter,
) -> Result<Outcome<CreatedProject>> {
    let resolution = resolve_template(&request.template)?;
    for notice in &resolution.notices {
        prompter.notice(notice)?;
    }

    let target = match settle_target(&request.project_name, &request.cwd, prompter)? {
        Outcome::Completed(target) => target,
        Outcome::Cancelled => {
            tracing::debug!("run cancelled before materialization");
            return Ok(Outcome::Cancelled);
        }
    };

    prompter.progress(Progress::Materializing {
        resolution: &resolution,
        target: &target,
    })?;
    let report = copy_template(resolution.template, source, &target).await?;
    prompter.progress(Progress::Materialized { report: &report })?;

    let manifest =
        transform_manifest(&target.path, &target.project_name, &resolution.selection).await?;
    let manifest_path = manifest.path().to_path_buf();
    prompter.progress(Progress::ManifestUpdated {
        path: &manifest_path,
    })?;

    tracing::debug!(
        template = resolution.key(),
        path = %target.path.display(),
        "project created"
    );

    Ok(Outcome::Completed(CreatedProject {
        resolution,
        target,
        report,
        manifest_path,
    }))
}

//! Destination resolution for a new project
//!
//! The resolver never prompts. Whenever a user decision is needed it
//! returns a [`PendingTarget`] carrying a [`Confirmation`]; the caller
//! answers it and gets the next [`TargetStep`] back.

use crate::error::{Outcome, Result, ScaffoldError};
use std::path::{Component, Path, PathBuf};

/// Project name meaning "use the working directory itself"
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// How the materializer must treat existing content at the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// Nothing in the way
    Fresh,
    /// Remove the destination entirely before copying
    Overwrite,
    /// Copy over a non-empty working directory, keeping unrelated files
    MergeIntoExisting,
}

/// Resolved destination for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    /// Resolved project name (the directory base name for in-place targets)
    pub project_name: String,

    /// Absolute, normalized destination path
    pub path: PathBuf,

    /// Destination is the working directory
    pub in_place: bool,

    pub conflict: Conflict,
}

/// A yes/no question the resolver needs answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Project name equals the working directory's name
    UseCurrentDirectory { path: PathBuf },
    /// Destination already exists
    Overwrite { name: String, path: PathBuf },
    /// In-place destination has non-hidden entries
    ContinueInNonEmpty { path: PathBuf, entries: usize },
}

impl Confirmation {
    /// Prompt text
    pub fn message(&self) -> String {
        match self {
            Confirmation::UseCurrentDirectory { path } => {
                format!("Create project in current directory ({})?", path.display())
            }
            Confirmation::Overwrite { name, .. } => {
                format!("Directory {} already exists. Overwrite?", name)
            }
            Confirmation::ContinueInNonEmpty { .. } => {
                "Current directory is not empty. Continue anyway?".to_string()
            }
        }
    }

    /// Answer preselected in the prompt
    pub fn default_answer(&self) -> bool {
        matches!(self, Confirmation::UseCurrentDirectory { .. })
    }

    /// Whether answering yes discards or mixes with existing files
    pub fn is_destructive(&self) -> bool {
        !matches!(self, Confirmation::UseCurrentDirectory { .. })
    }
}

/// Either a finished target or a question blocking it
#[derive(Debug)]
pub enum TargetStep {
    Ready(ProjectTarget),
    Confirm(PendingTarget),
}

#[derive(Debug)]
enum Pending {
    CurrentDirectory { name: String, cwd: PathBuf },
    Overwrite { name: String, path: PathBuf },
    NonEmpty { name: String, cwd: PathBuf },
}

/// Target resolution suspended on a [`Confirmation`]
#[derive(Debug)]
pub struct PendingTarget {
    request: Confirmation,
    pending: Pending,
}

impl PendingTarget {
    pub fn request(&self) -> &Confirmation {
        &self.request
    }

    /// Supply the user's answer and continue resolution
    pub fn answer(self, accepted: bool) -> Result<Outcome<TargetStep>> {
        match self.pending {
            Pending::CurrentDirectory { name, cwd } => {
                let step = if accepted {
                    in_place_step(name, cwd)?
                } else {
                    let path = cwd.join(&name);
                    subdirectory_step(name, path)
                };
                Ok(Outcome::Completed(step))
            }
            Pending::Overwrite { name, path } => {
                if !accepted {
                    tracing::debug!(path = %path.display(), "overwrite declined");
                    return Ok(Outcome::Cancelled);
                }
                Ok(Outcome::Completed(TargetStep::Ready(ProjectTarget {
                    project_name: name,
                    path,
                    in_place: false,
                    conflict: Conflict::Overwrite,
                })))
            }
            Pending::NonEmpty { name, cwd } => {
                if !accepted {
                    tracing::debug!(
                        path = %cwd.display(),
                        "continue in non-empty directory declined"
                    );
                    return Ok(Outcome::Cancelled);
                }
                Ok(Outcome::Completed(TargetStep::Ready(ProjectTarget {
                    project_name: name,
                    path: cwd,
                    in_place: true,
                    conflict: Conflict::MergeIntoExisting,
                })))
            }
        }
    }
}

/// Check a raw project name: letters, digits, hyphens, underscores, or `.`
pub fn validate_project_name(raw: &str) -> Result<()> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ScaffoldError::invalid_input("Project name is required"));
    }
    if name == CURRENT_DIR_SENTINEL {
        return Ok(());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ScaffoldError::invalid_input(
            "Project name can only contain letters, numbers, hyphens, and underscores",
        ));
    }
    Ok(())
}

/// Start resolving the destination for `raw_name` relative to `cwd`
pub fn resolve_target(raw_name: &str, cwd: &Path) -> Result<TargetStep> {
    validate_project_name(raw_name)?;

    if !cwd.is_absolute() {
        return Err(ScaffoldError::invalid_input(format!(
            "working directory must be absolute: {}",
            cwd.display()
        )));
    }
    let cwd = normalize(cwd);
    let cwd_name = cwd.file_name().map(|n| n.to_string_lossy().into_owned());

    let raw_name = raw_name.trim();

    if raw_name == CURRENT_DIR_SENTINEL {
        let cwd_name = cwd_name.ok_or_else(|| {
            ScaffoldError::invalid_input(format!(
                "cannot derive a project name from {}",
                cwd.display()
            ))
        })?;
        tracing::debug!(name = %cwd_name, "using current directory name");
        return in_place_step(cwd_name, cwd);
    }

    if let Some(cwd_name) = cwd_name.filter(|name| name == raw_name) {
        return Ok(TargetStep::Confirm(PendingTarget {
            request: Confirmation::UseCurrentDirectory { path: cwd.clone() },
            pending: Pending::CurrentDirectory {
                name: cwd_name,
                cwd,
            },
        }));
    }

    let path = cwd.join(raw_name);
    Ok(subdirectory_step(raw_name.to_string(), path))
}

fn subdirectory_step(name: String, path: PathBuf) -> TargetStep {
    // symlink_metadata so a dangling link still counts as occupied
    if path.symlink_metadata().is_ok() {
        return TargetStep::Confirm(PendingTarget {
            request: Confirmation::Overwrite {
                name: name.clone(),
                path: path.clone(),
            },
            pending: Pending::Overwrite { name, path },
        });
    }

    TargetStep::Ready(ProjectTarget {
        project_name: name,
        path,
        in_place: false,
        conflict: Conflict::Fresh,
    })
}

fn in_place_step(name: String, cwd: PathBuf) -> Result<TargetStep> {
    let entries = count_visible_entries(&cwd)?;
    if entries > 0 {
        return Ok(TargetStep::Confirm(PendingTarget {
            request: Confirmation::ContinueInNonEmpty {
                path: cwd.clone(),
                entries,
            },
            pending: Pending::NonEmpty { name, cwd },
        }));
    }

    Ok(TargetStep::Ready(ProjectTarget {
        project_name: name,
        path: cwd,
        in_place: true,
        conflict: Conflict::Fresh,
    }))
}

/// Number of entries whose name does not start with `.`
fn count_visible_entries(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| ScaffoldError::io(format!("Failed to read {}", dir.display()), e))?;

    let mut count = 0;
    for entry in entries {
        let entry =
            entry.map_err(|e| ScaffoldError::io(format!("Failed to read {}", dir.display()), e))?;
        if !entry.file_name().to_string_lossy().starts_with('.') {
            count += 1;
        }
    }
    Ok(count)
}

/// Lexically resolve `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

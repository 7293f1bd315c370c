//! Template source location and materialization
//!
//! This module provides:
//! - Templates root resolution (flag, environment, bundled location)
//! - The optional root manifest (templates/template.yaml)
//! - Template tree copying into a resolved project target
//! - Version compatibility checking

pub mod copier;
pub mod manifest;
pub mod version;

use crate::catalog::TemplateEntry;
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

pub use copier::{copy_template, CopyReport};
pub use manifest::RootManifest;
pub use version::check_compatibility;

/// Root manifest file name inside a templates root
pub const ROOT_MANIFEST_FILE: &str = "template.yaml";

/// Directory holding one sub-directory per template identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    root: PathBuf,
}

impl TemplateSource {
    /// Resolve the templates root for a product
    ///
    /// Order: explicit path, the product's environment variable, `templates/`
    /// next to the executable, then the product's bundled location.
    pub fn from_config<C: ProductConfig>(config: &C, explicit: Option<PathBuf>) -> Result<Self> {
        let root = explicit
            .or_else(|| std::env::var_os(config.template_dir_env()).map(PathBuf::from))
            .or_else(beside_executable)
            .unwrap_or_else(|| config.bundled_template_dir());

        if !root.is_dir() {
            return Err(ScaffoldError::invalid_input(format!(
                "Template directory not found: {}",
                root.display()
            )));
        }

        tracing::debug!(root = %root.display(), "using templates root");
        Ok(Self { root })
    }

    /// Use a specific directory as the templates root
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self { root: path.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of one template tree
    pub fn template_dir(&self, template: &TemplateEntry) -> PathBuf {
        template.source_dir(&self.root)
    }

    /// Read templates/template.yaml if present
    ///
    /// The manifest is advisory: a missing or unreadable file yields `None`.
    pub async fn root_manifest(&self) -> Option<RootManifest> {
        let path = self.root.join(ROOT_MANIFEST_FILE);
        let content = tokio::fs::read_to_string(&path).await.ok()?;
        match RootManifest::parse(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring unreadable root manifest"
                );
                None
            }
        }
    }
}

fn beside_executable() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?.join("templates");
    dir.is_dir().then_some(dir)
}

//! Product configuration trait for CLI binaries
//!
//! The engine is product-agnostic; the binary supplies its identity, where
//! bundled templates live and what to tell the user afterwards.

use crate::resolve::ProjectTarget;
use std::path::PathBuf;

/// Configuration trait for a scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the templates root
    fn template_dir_env(&self) -> &'static str;

    /// Templates root used when nothing else is configured
    fn bundled_template_dir(&self) -> PathBuf;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, target: &ProjectTarget) -> Vec<String> {
        let mut steps = Vec::new();
        if !target.in_place {
            steps.push(format!("cd {}", target.project_name));
        }
        steps.push("npm install".to_string());
        steps.push("npm run dev".to_string());
        steps
    }
}

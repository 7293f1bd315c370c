//! Selection resolution: raw input to one validated template

use crate::catalog::registry::{self, TemplateEntry, FALLBACKS};
use crate::catalog::Selection;
use crate::error::{Result, ScaffoldError};

/// Message the presentation layer must show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// A template identifier that is known to exist in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub template: &'static TemplateEntry,

    /// Options the resolved template implements (after any fallback)
    pub selection: Selection,

    /// Identifier composed from the user's choices, before any fallback
    pub requested: String,

    /// Substitutions applied on the way
    pub notices: Vec<Notice>,
}

impl Resolution {
    pub fn key(&self) -> &'static str {
        self.template.key
    }

    pub fn used_fallback(&self) -> bool {
        !self.notices.is_empty()
    }
}

/// Resolve an explicit `--template` identifier
pub fn resolve_explicit(key: &str) -> Result<Resolution> {
    let template = registry::find(key).ok_or_else(|| ScaffoldError::UnknownTemplate {
        requested: key.to_string(),
        available: registry::keys(),
    })?;

    tracing::debug!(template = template.key, "resolved explicit template");

    Ok(Resolution {
        template,
        selection: template.selection,
        requested: key.to_string(),
        notices: Vec::new(),
    })
}

/// Resolve per-axis choices, applying the fallback table when needed
pub fn resolve_choices(selection: Selection) -> Result<Resolution> {
    let requested = selection.key();
    let mut current = selection;
    let mut notices = Vec::new();

    if registry::find_selection(&current).is_none() {
        for fallback in FALLBACKS {
            if let Some(substituted) = fallback.apply(current) {
                tracing::warn!(
                    from = %current.key(),
                    to = %substituted.key(),
                    "no template for selection, substituting"
                );
                notices.push(Notice {
                    message: fallback.notice.to_string(),
                });
                current = substituted;
                if registry::find_selection(&current).is_some() {
                    break;
                }
            }
        }
    }

    let template =
        registry::find_selection(&current).ok_or_else(|| ScaffoldError::UnknownTemplate {
            requested: requested.clone(),
            available: registry::keys(),
        })?;

    tracing::debug!(template = template.key, %requested, "resolved axis selection");

    Ok(Resolution {
        template,
        selection: current,
        requested,
        notices,
    })
}

//! Template registry and the router/form fallback table

use super::axes::{Language, RouterForm, Selection, Styling};
use std::path::{Path, PathBuf};

/// Metadata for one pre-authored template tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Registry key, also the template's directory name
    pub key: &'static str,

    /// Display name of the template
    pub name: &'static str,

    /// Description of what the template provides
    pub description: &'static str,

    /// Axis options this template implements
    pub selection: Selection,
}

impl TemplateEntry {
    /// Location of the template tree under a templates root
    pub fn source_dir(&self, templates_root: &Path) -> PathBuf {
        templates_root.join(self.key)
    }
}

/// Every template shipped with the distribution
pub static TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        key: "javascript",
        name: "JavaScript",
        description: "Standard JavaScript template with React 19, Vite, and Formik",
        selection: Selection::new(Language::JavaScript, RouterForm::Formik, Styling::Vanilla),
    },
    TemplateEntry {
        key: "typescript",
        name: "TypeScript",
        description: "TypeScript template with React 19, Vite, and Formik",
        selection: Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Vanilla),
    },
    TemplateEntry {
        key: "javascript-tailwind",
        name: "JavaScript + Tailwind CSS",
        description: "JavaScript template with Tailwind CSS for utility-first styling",
        selection: Selection::new(Language::JavaScript, RouterForm::Formik, Styling::Tailwind),
    },
    TemplateEntry {
        key: "typescript-tailwind",
        name: "TypeScript + Tailwind CSS",
        description: "TypeScript template with Tailwind CSS for utility-first styling",
        selection: Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Tailwind),
    },
    TemplateEntry {
        key: "javascript-shadcn",
        name: "JavaScript + ShadcnUI",
        description: "JavaScript template with ShadcnUI components and Tailwind CSS",
        selection: Selection::new(Language::JavaScript, RouterForm::Formik, Styling::Shadcn),
    },
    TemplateEntry {
        key: "typescript-shadcn",
        name: "TypeScript + ShadcnUI",
        description: "TypeScript template with ShadcnUI components and Tailwind CSS",
        selection: Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Shadcn),
    },
];

/// Substitution applied when a composed identifier has no template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    pub from: RouterForm,
    pub to: RouterForm,
    /// Shown to the user whenever the substitution happens
    pub notice: &'static str,
}

impl Fallback {
    /// Apply to a selection, if it uses the substituted option
    pub fn apply(&self, selection: Selection) -> Option<Selection> {
        (selection.router_form == self.from).then_some(Selection {
            router_form: self.to,
            ..selection
        })
    }
}

/// Known-safe substitutions, tried in order
pub static FALLBACKS: &[Fallback] = &[Fallback {
    from: RouterForm::HookForm,
    to: RouterForm::Formik,
    notice: "React Hook Form + Zod templates are not available yet; \
             using React Router + Formik + Yup",
}];

/// Look up a template by exact key
pub fn find(key: &str) -> Option<&'static TemplateEntry> {
    TEMPLATES.iter().find(|entry| entry.key == key)
}

/// Look up the template implementing a selection
pub fn find_selection(selection: &Selection) -> Option<&'static TemplateEntry> {
    find(&selection.key())
}

/// All registry keys, in registry order
pub fn keys() -> Vec<String> {
    TEMPLATES.iter().map(|entry| entry.key.to_string()).collect()
}

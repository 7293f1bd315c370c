//! Selectable feature axes and their options

use crate::error::{Result, ScaffoldError};
use crate::manifest::augment::{Augmentation, DependencyTable};
use std::fmt;
use std::str::FromStr;

const TYPESCRIPT_SUPPORT: &[Augmentation] = &[Augmentation {
    table: DependencyTable::Dev,
    entries: &[("typescript", "^5.2.2"), ("@types/node", "^20.8.0")],
}];

const TAILWIND_TOOLCHAIN: Augmentation = Augmentation {
    table: DependencyTable::Runtime,
    entries: &[
        ("tailwindcss", "^3.3.0"),
        ("autoprefixer", "^10.4.16"),
        ("postcss", "^8.4.31"),
    ],
};

const SHADCN_RUNTIME: Augmentation = Augmentation {
    table: DependencyTable::Runtime,
    entries: &[
        ("@radix-ui/react-slot", "^1.0.2"),
        ("class-variance-authority", "^0.7.0"),
        ("clsx", "^2.0.0"),
        ("lucide-react", "^0.544.0"),
        ("tailwind-merge", "^1.14.0"),
    ],
};

/// One option of a closed, mutually exclusive feature axis
pub trait AxisOption: Copy + Eq + fmt::Debug + Sized + 'static {
    /// Axis name used in prompts and error messages
    const AXIS: &'static str;

    /// Every option of the axis, in catalog order
    fn all() -> &'static [Self];

    /// Stable key (used by flags and lookups)
    fn key(&self) -> &'static str;

    /// Human-readable name
    fn display_name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Segment contributed to the template identifier
    fn fragment(&self) -> &'static str;

    /// Manifest entries owned by this option
    fn augmentations(&self) -> &'static [Augmentation] {
        &[]
    }

    /// Look up an option by its key
    fn from_key(key: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|option| option.key() == key)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::all().iter().map(|o| o.key()).collect();
                ScaffoldError::invalid_input(format!(
                    "unknown {} '{}' (expected one of: {})",
                    Self::AXIS,
                    key,
                    valid.join(", ")
                ))
            })
    }
}

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
}

impl AxisOption for Language {
    const AXIS: &'static str = "language";

    fn all() -> &'static [Self] {
        &[Language::JavaScript, Language::TypeScript]
    }

    fn key(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Language::JavaScript => "Modern JavaScript with React 19 and Vite",
            Language::TypeScript => "TypeScript with full type safety and better DX",
        }
    }

    fn fragment(&self) -> &'static str {
        self.key()
    }

    fn augmentations(&self) -> &'static [Augmentation] {
        match self {
            Language::JavaScript => &[],
            Language::TypeScript => TYPESCRIPT_SUPPORT,
        }
    }
}

/// Routing and form handling stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RouterForm {
    #[default]
    Formik,
    HookForm,
}

impl AxisOption for RouterForm {
    const AXIS: &'static str = "router/form stack";

    fn all() -> &'static [Self] {
        &[RouterForm::Formik, RouterForm::HookForm]
    }

    fn key(&self) -> &'static str {
        match self {
            RouterForm::Formik => "router-formik",
            RouterForm::HookForm => "router-rhf",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RouterForm::Formik => "React Router + Formik + Yup",
            RouterForm::HookForm => "React Router + React Hook Form + Zod",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            RouterForm::Formik => {
                "React Router v7 with traditional Formik forms and Yup validation"
            }
            RouterForm::HookForm => {
                "React Router v7 with modern React Hook Form and Zod validation"
            }
        }
    }

    fn fragment(&self) -> &'static str {
        match self {
            RouterForm::Formik => "",
            RouterForm::HookForm => "-rhf",
        }
    }
}

/// Styling approach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Styling {
    #[default]
    Vanilla,
    Tailwind,
    Shadcn,
}

impl AxisOption for Styling {
    const AXIS: &'static str = "styling";

    fn all() -> &'static [Self] {
        &[Styling::Vanilla, Styling::Tailwind, Styling::Shadcn]
    }

    fn key(&self) -> &'static str {
        match self {
            Styling::Vanilla => "vanilla",
            Styling::Tailwind => "tailwind",
            Styling::Shadcn => "shadcn",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Styling::Vanilla => "Vanilla CSS",
            Styling::Tailwind => "Tailwind CSS",
            Styling::Shadcn => "Tailwind CSS + ShadcnUI",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Styling::Vanilla => "Standard CSS with Sass preprocessing",
            Styling::Tailwind => "Utility-first CSS framework",
            Styling::Shadcn => "Modern UI components built on Tailwind CSS",
        }
    }

    fn fragment(&self) -> &'static str {
        match self {
            Styling::Vanilla => "",
            Styling::Tailwind => "-tailwind",
            Styling::Shadcn => "-shadcn",
        }
    }

    fn augmentations(&self) -> &'static [Augmentation] {
        // shadcn builds on the tailwind toolchain
        const TAILWIND: &[Augmentation] = &[TAILWIND_TOOLCHAIN];
        const SHADCN: &[Augmentation] = &[TAILWIND_TOOLCHAIN, SHADCN_RUNTIME];
        match self {
            Styling::Vanilla => &[],
            Styling::Tailwind => TAILWIND,
            Styling::Shadcn => SHADCN,
        }
    }
}

macro_rules! axis_display_and_parse {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.display_name())
                }
            }

            impl FromStr for $ty {
                type Err = ScaffoldError;

                fn from_str(s: &str) -> Result<Self> {
                    Self::from_key(s.trim())
                }
            }
        )*
    };
}

axis_display_and_parse!(Language, RouterForm, Styling);

/// One option per axis, in fixed axis order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub language: Language,
    pub router_form: RouterForm,
    pub styling: Styling,
}

impl Selection {
    pub const fn new(language: Language, router_form: RouterForm, styling: Styling) -> Self {
        Self {
            language,
            router_form,
            styling,
        }
    }

    /// Serialize to a registry lookup key: language, router/form, styling fragments
    pub fn key(&self) -> String {
        let mut key = String::from(self.language.fragment());
        key.push_str(self.router_form.fragment());
        key.push_str(self.styling.fragment());
        key
    }

    /// Manifest augmentations of every selected option, in axis order
    pub fn augmentations(&self) -> impl Iterator<Item = &'static Augmentation> {
        self.language
            .augmentations()
            .iter()
            .chain(self.router_form.augmentations())
            .chain(self.styling.augmentations())
    }

    /// Every legal combination of axis options
    pub fn all() -> impl Iterator<Item = Selection> {
        Language::all().iter().flat_map(|&language| {
            RouterForm::all().iter().flat_map(move |&router_form| {
                Styling::all()
                    .iter()
                    .map(move |&styling| Selection::new(language, router_form, styling))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_unique_within_axis() {
        fn assert_unique<T: AxisOption>() {
            let keys: HashSet<_> = T::all().iter().map(|o| o.key()).collect();
            assert_eq!(keys.len(), T::all().len(), "duplicate key in {}", T::AXIS);
        }
        assert_unique::<Language>();
        assert_unique::<RouterForm>();
        assert_unique::<Styling>();
    }

    #[test]
    fn test_selection_key_composition() {
        let selection = Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Tailwind);
        assert_eq!(selection.key(), "typescript-tailwind");

        let selection = Selection::new(Language::JavaScript, RouterForm::HookForm, Styling::Shadcn);
        assert_eq!(selection.key(), "javascript-rhf-shadcn");

        assert_eq!(Selection::default().key(), "javascript");
    }

    #[test]
    fn test_parse_axis_keys() {
        assert_eq!("typescript".parse::<Language>().unwrap(), Language::TypeScript);
        assert_eq!("router-rhf".parse::<RouterForm>().unwrap(), RouterForm::HookForm);
        assert_eq!(" shadcn ".parse::<Styling>().unwrap(), Styling::Shadcn);
    }

    #[test]
    fn test_unknown_axis_key_is_invalid_input() {
        let err = "cobol".parse::<Language>().unwrap_err();
        match err {
            ScaffoldError::InvalidInput { message } => {
                assert!(message.contains("cobol"));
                assert!(message.contains("javascript, typescript"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_selections_enumerated() {
        assert_eq!(Selection::all().count(), 2 * 2 * 3);
    }

    #[test]
    fn test_shadcn_includes_tailwind_toolchain() {
        let keys: Vec<&str> = Styling::Shadcn
            .augmentations()
            .iter()
            .flat_map(|a| a.entries.iter().map(|(name, _)| *name))
            .collect();
        assert!(keys.contains(&"tailwindcss"));
        assert!(keys.contains(&"clsx"));
    }
}

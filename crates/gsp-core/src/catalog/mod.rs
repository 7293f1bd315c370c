//! Option catalog and template registry
//!
//! Both are process-wide static tables. Axis options compose into a
//! [`Selection`], which is only turned into a string key when looking up
//! the [`registry`].

pub mod axes;
pub mod registry;

pub use axes::{AxisOption, Language, RouterForm, Selection, Styling};
pub use registry::{Fallback, TemplateEntry, FALLBACKS, TEMPLATES};

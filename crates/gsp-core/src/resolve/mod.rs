//! Turning raw user input into a template and a destination

pub mod selection;
pub mod target;

pub use selection::{resolve_choices, resolve_explicit, Notice, Resolution};
pub use target::{
    resolve_target, validate_project_name, Confirmation, Conflict, PendingTarget, ProjectTarget,
    TargetStep, CURRENT_DIR_SENTINEL,
};

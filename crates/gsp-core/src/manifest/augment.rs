//! Dependency entries contributed by axis options

use serde_json::{Map, Value};

/// Dependency table of a `package.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTable {
    Runtime,
    Dev,
}

impl DependencyTable {
    /// JSON key of the table
    pub fn key(&self) -> &'static str {
        match self {
            DependencyTable::Runtime => "dependencies",
            DependencyTable::Dev => "devDependencies",
        }
    }
}

/// Package/version pairs merged into one dependency table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Augmentation {
    pub table: DependencyTable,
    pub entries: &'static [(&'static str, &'static str)],
}

impl Augmentation {
    /// Insert or overwrite the owned keys; everything else is left alone
    pub fn merge_into(&self, table: &mut Map<String, Value>) {
        for (package, version) in self.entries {
            table.insert((*package).to_string(), Value::String((*version).to_string()));
        }
    }
}

//! `package.json` loading, patching and writing

use super::augment::DependencyTable;
use crate::catalog::Selection;
use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Manifest file name at the template root
pub const MANIFEST_FILE: &str = "package.json";

/// Package name derived from a project name: lowercase, whitespace runs become `-`
pub fn package_name(project_name: &str) -> String {
    let mut name = String::with_capacity(project_name.len());
    let mut in_whitespace = false;
    for c in project_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            name.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    name
}

/// A parsed `package.json` with its original key order
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl PackageManifest {
    /// Parse manifest content; `path` is only used for error reporting
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| corrupt(path, e))?;
        match value {
            Value::Object(root) => Ok(Self {
                path: path.to_path_buf(),
                root,
            }),
            _ => Err(corrupt(path, "top-level value is not an object")),
        }
    }

    /// Read and parse the manifest inside `project_dir`
    pub async fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| corrupt(&path, e))?;
        Self::parse(&path, &content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    pub fn set_name(&mut self, project_name: &str) {
        self.root
            .insert("name".to_string(), Value::String(package_name(project_name)));
    }

    /// Dependency table, created empty at the end of the document if absent
    fn table_mut(&mut self, table: DependencyTable) -> Result<&mut Map<String, Value>> {
        let path = self.path.clone();
        let entry = self
            .root
            .entry(table.key())
            .or_insert_with(|| Value::Object(Map::new()));
        entry
            .as_object_mut()
            .ok_or_else(|| corrupt(&path, format!("\"{}\" is not an object", table.key())))
    }

    pub fn dependency(&self, table: DependencyTable, package: &str) -> Option<&str> {
        self.root
            .get(table.key())
            .and_then(|t| t.get(package))
            .and_then(Value::as_str)
    }

    /// Merge every augmentation of the selection, in axis order
    pub fn apply_selection(&mut self, selection: &Selection) -> Result<()> {
        for augmentation in selection.augmentations() {
            let table = self.table_mut(augmentation.table)?;
            augmentation.merge_into(table);
            tracing::debug!(
                table = augmentation.table.key(),
                entries = augmentation.entries.len(),
                "applied manifest augmentation"
            );
        }
        Ok(())
    }

    /// Two-space indented JSON with a trailing newline
    pub fn render(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.root)
            .map_err(|e| corrupt(&self.path, e))?;
        out.push('\n');
        Ok(out)
    }

    pub async fn save(&self) -> Result<()> {
        let content = self.render()?;
        fs::write(&self.path, content).await.map_err(|e| {
            ScaffoldError::io(format!("Failed to write {}", self.path.display()), e)
        })
    }
}

/// Rewrite the manifest in `project_dir` for the given project name and selection
pub async fn transform_manifest(
    project_dir: &Path,
    project_name: &str,
    selection: &Selection,
) -> Result<PackageManifest> {
    let mut manifest = PackageManifest::load(project_dir).await?;
    manifest.set_name(project_name);
    manifest.apply_selection(selection)?;
    manifest.save().await?;

    tracing::debug!(path = %manifest.path().display(), "package manifest updated");
    Ok(manifest)
}

fn corrupt(path: &Path, reason: impl std::fmt::Display) -> ScaffoldError {
    ScaffoldError::ManifestCorrupt {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Language, RouterForm, Styling};

    const TEMPLATE_MANIFEST: &str = r#"{
  "name": "gsp-react-template",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build"
  },
  "dependencies": {
    "react": "^19.1.0",
    "postcss": "^7.0.0"
  },
  "devDependencies": {
    "vite": "^7.0.4"
  },
  "browserslist": ["defaults"]
}
"#;

    fn transform(content: &str, name: &str, selection: &Selection) -> String {
        let mut manifest = PackageManifest::parse(Path::new("package.json"), content).unwrap();
        manifest.set_name(name);
        manifest.apply_selection(selection).unwrap();
        manifest.render().unwrap()
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("my-app"), "my-app");
        assert_eq!(package_name("My App"), "my-app");
        assert_eq!(package_name("My   Big\tApp"), "my-big-app");
        assert_eq!(package_name("Proj_2"), "proj_2");
    }

    #[test]
    fn test_package_name_idempotent() {
        for name in ["my-app", "My App", "ALLCAPS", "a  b", "under_score", "x-1"] {
            let once = package_name(name);
            assert_eq!(package_name(&once), once);
        }
    }

    #[test]
    fn test_typescript_tailwind_augmentation() {
        let selection = Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Tailwind);
        let out = transform(TEMPLATE_MANIFEST, "my-app", &selection);
        let manifest = PackageManifest::parse(Path::new("package.json"), &out).unwrap();

        assert_eq!(manifest.name(), Some("my-app"));
        assert_eq!(manifest.dependency(DependencyTable::Dev, "typescript"), Some("^5.2.2"));
        assert_eq!(manifest.dependency(DependencyTable::Dev, "@types/node"), Some("^20.8.0"));
        assert_eq!(manifest.dependency(DependencyTable::Dev, "vite"), Some("^7.0.4"));
        assert_eq!(manifest.dependency(DependencyTable::Runtime, "tailwindcss"), Some("^3.3.0"));
        assert_eq!(manifest.dependency(DependencyTable::Runtime, "autoprefixer"), Some("^10.4.16"));
        assert_eq!(manifest.dependency(DependencyTable::Runtime, "postcss"), Some("^8.4.31"));
        assert_eq!(manifest.dependency(DependencyTable::Runtime, "react"), Some("^19.1.0"));
        assert_eq!(manifest.dependency(DependencyTable::Runtime, "clsx"), None);
    }

    #[test]
    fn test_vanilla_javascript_only_renames() {
        let out = transform(TEMPLATE_MANIFEST, "Plain App", &Selection::default());
        let original =
            PackageManifest::parse(Path::new("package.json"), TEMPLATE_MANIFEST).unwrap();
        let patched = PackageManifest::parse(Path::new("package.json"), &out).unwrap();

        assert_eq!(patched.name(), Some("plain-app"));
        assert_eq!(patched.root.len(), original.root.len());
        assert_eq!(patched.root["dependencies"], original.root["dependencies"]);
        assert_eq!(patched.root["devDependencies"], original.root["devDependencies"]);
    }

    #[test]
    fn test_unrelated_fields_and_order_preserved() {
        let selection = Selection::new(Language::JavaScript, RouterForm::Formik, Styling::Shadcn);
        let out = transform(TEMPLATE_MANIFEST, "my-app", &selection);
        let patched = PackageManifest::parse(Path::new("package.json"), &out).unwrap();

        let keys: Vec<&str> = patched.root.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "name",
                "private",
                "version",
                "type",
                "scripts",
                "dependencies",
                "devDependencies",
                "browserslist"
            ]
        );
        assert_eq!(patched.root["browserslist"][0], "defaults");
        assert_eq!(
            patched.dependency(DependencyTable::Runtime, "lucide-react"),
            Some("^0.544.0")
        );
    }

    #[test]
    fn test_transform_is_stable() {
        let selection = Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Shadcn);
        let first = transform(TEMPLATE_MANIFEST, "My App", &selection);
        let second = transform(TEMPLATE_MANIFEST, "My App", &selection);
        assert_eq!(first, second);

        let again = transform(&first, "My App", &selection);
        assert_eq!(again, first);
        assert!(first.ends_with("}\n"));
    }

    #[test]
    fn test_missing_tables_are_created() {
        let selection = Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Tailwind);
        let out = transform(r#"{"name":"x"}"#, "demo", &selection);
        let patched = PackageManifest::parse(Path::new("package.json"), &out).unwrap();

        assert_eq!(patched.dependency(DependencyTable::Dev, "typescript"), Some("^5.2.2"));
        assert_eq!(
            patched.dependency(DependencyTable::Runtime, "tailwindcss"),
            Some("^3.3.0")
        );
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let err = PackageManifest::parse(Path::new("package.json"), "{ not json").unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestCorrupt { .. }));

        let err = PackageManifest::parse(Path::new("package.json"), "[1, 2]").unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestCorrupt { .. }));
    }

    #[test]
    fn test_non_object_table_is_corrupt() {
        let mut manifest =
            PackageManifest::parse(Path::new("package.json"), r#"{"devDependencies": "oops"}"#)
                .unwrap();
        let selection = Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Vanilla);
        let err = manifest.apply_selection(&selection).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestCorrupt { .. }));
    }

    #[tokio::test]
    async fn test_missing_manifest_is_corrupt() {
        let tmp = tempfile::tempdir().unwrap();
        let err = transform_manifest(tmp.path(), "demo", &Selection::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestCorrupt { .. }));
    }

    #[tokio::test]
    async fn test_transform_manifest_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_FILE), TEMPLATE_MANIFEST).unwrap();

        let selection = Selection::new(Language::TypeScript, RouterForm::Formik, Styling::Vanilla);
        transform_manifest(tmp.path(), "my-app", &selection)
            .await
            .unwrap();

        let written = std::fs::read_to_string(tmp.path().join(MANIFEST_FILE)).unwrap();
        assert!(written.contains("\"name\": \"my-app\""));
        assert!(written.contains("\"typescript\": \"^5.2.2\""));
    }
}

//! Root template manifest (templates/template.yaml)

use serde::{Deserialize, Serialize};

/// Optional description of a templates root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootManifest {
    /// Minimum CLI version the templates were authored for
    #[serde(default)]
    pub version: Option<String>,

    /// Template directory names shipped in this root
    #[serde(default)]
    pub templates: Vec<String>,
}

impl RootManifest {
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Registry keys with no directory listed in this manifest
    pub fn missing<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        keys.into_iter()
            .filter(|key| !self.templates.iter().any(|t| t == *key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_manifest() {
        let manifest = RootManifest::parse(
            "version: 1.1.0\ntemplates:\n  - javascript\n  - typescript\n",
        )
        .unwrap();
        assert_eq!(manifest.version.as_deref(), Some("1.1.0"));
        assert_eq!(manifest.templates, vec!["javascript", "typescript"]);
    }

    #[test]
    fn test_version_is_optional() {
        let manifest = RootManifest::parse("templates: []\n").unwrap();
        assert!(manifest.version.is_none());
    }

    #[test]
    fn test_missing_keys() {
        let manifest = RootManifest::parse("templates: [javascript]\n").unwrap();
        assert_eq!(
            manifest.missing(["javascript", "typescript-shadcn"]),
            vec!["typescript-shadcn"]
        );
    }
}

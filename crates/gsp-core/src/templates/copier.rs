//! Template tree copying into a resolved project target

use super::TemplateSource;
use crate::catalog::TemplateEntry;
use crate::error::{Result, ScaffoldError};
use crate::resolve::{Conflict, ProjectTarget};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// What a materialization wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Files written, relative to the target root
    pub files: Vec<PathBuf>,

    /// Directories created or reused, excluding the root
    pub directories: usize,
}

/// Copy the template's tree into the target
///
/// Overwrite targets are removed first. In-place targets are written over,
/// leaving unrelated files untouched. A failure midway leaves whatever was
/// already copied in place.
pub async fn copy_template(
    template: &TemplateEntry,
    source: &TemplateSource,
    target: &ProjectTarget,
) -> Result<CopyReport> {
    copy_tree(&source.template_dir(template), target).await
}

/// Copy an arbitrary directory tree into the target
pub async fn copy_tree(source: &Path, target: &ProjectTarget) -> Result<CopyReport> {
    let source_meta = fs::metadata(source)
        .await
        .map_err(|e| failed(source, e))?;
    if !source_meta.is_dir() {
        return Err(failed(
            source,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "template source is not a directory",
            ),
        ));
    }

    if target.conflict == Conflict::Overwrite && !target.in_place {
        tracing::debug!(path = %target.path.display(), "removing existing destination");
        remove_existing(&target.path).await?;
    }

    // Ensure target directory exists
    fs::create_dir_all(&target.path)
        .await
        .map_err(|e| failed(&target.path, e))?;

    let mut report = CopyReport::default();

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            failed(&path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| {
                failed(
                    entry.path(),
                    std::io::Error::new(std::io::ErrorKind::InvalidInput, "entry outside template"),
                )
            })?
            .to_path_buf();
        let destination = target.path.join(&relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination)
                .await
                .map_err(|e| failed(&destination, e))?;
            report.directories += 1;
        } else {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| failed(parent, e))?;
            }
            fs::copy(entry.path(), &destination)
                .await
                .map_err(|e| failed(&destination, e))?;
            report.files.push(relative);
        }
    }

    tracing::debug!(
        files = report.files.len(),
        directories = report.directories,
        target = %target.path.display(),
        "template copied"
    );

    Ok(report)
}

async fn remove_existing(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(failed(path, e)),
    };

    let removed = if meta.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };
    removed.map_err(|e| failed(path, e))
}

fn failed(path: &Path, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::MaterializationFailed {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn sample_template(root: &Path) -> PathBuf {
        let dir = root.join("typescript-tailwind");
        stdfs::create_dir_all(dir.join("src/Layouts/MainLayout")).unwrap();
        stdfs::create_dir_all(dir.join("public")).unwrap();
        stdfs::write(dir.join("package.json"), "{\"name\":\"template\"}\n").unwrap();
        stdfs::write(dir.join("src/Layouts/MainLayout/index.tsx"), "export default 1;\n").unwrap();
        stdfs::write(dir.join("public/favicon.ico"), [0u8, 159, 146, 150]).unwrap();
        dir
    }

    fn target(path: PathBuf, in_place: bool, conflict: Conflict) -> ProjectTarget {
        ProjectTarget {
            project_name: "my-app".to_string(),
            path,
            in_place,
            conflict,
        }
    }

    #[tokio::test]
    async fn test_copy_fresh_target() {
        let tmp = tempfile::tempdir().unwrap();
        let source = sample_template(tmp.path());
        let dest = tmp.path().join("out/my-app");

        let report = copy_tree(&source, &target(dest.clone(), false, Conflict::Fresh))
            .await
            .unwrap();

        assert_eq!(report.files.len(), 3);
        assert_eq!(
            stdfs::read(dest.join("public/favicon.ico")).unwrap(),
            vec![0u8, 159, 146, 150]
        );
        assert_eq!(
            stdfs::read_to_string(dest.join("src/Layouts/MainLayout/index.tsx")).unwrap(),
            "export default 1;\n"
        );
    }

    #[tokio::test]
    async fn test_overwrite_removes_old_content() {
        let tmp = tempfile::tempdir().unwrap();
        let source = sample_template(tmp.path());
        let dest = tmp.path().join("my-app");
        stdfs::create_dir_all(&dest).unwrap();
        stdfs::write(dest.join("stale.txt"), "old").unwrap();

        copy_tree(&source, &target(dest.clone(), false, Conflict::Overwrite))
            .await
            .unwrap();

        assert!(!dest.join("stale.txt").exists());
        assert!(dest.join("package.json").exists());
    }

    #[tokio::test]
    async fn test_in_place_keeps_unrelated_files() {
        let tmp = tempfile::tempdir().unwrap();
        let source = sample_template(tmp.path());
        let dest = tmp.path().join("proj2");
        stdfs::create_dir_all(&dest).unwrap();
        stdfs::write(dest.join("notes.txt"), "mine").unwrap();
        stdfs::write(dest.join("package.json"), "old").unwrap();

        copy_tree(&source, &target(dest.clone(), true, Conflict::MergeIntoExisting))
            .await
            .unwrap();

        assert_eq!(stdfs::read_to_string(dest.join("notes.txt")).unwrap(), "mine");
        assert_eq!(
            stdfs::read_to_string(dest.join("package.json")).unwrap(),
            "{\"name\":\"template\"}\n"
        );
    }

    #[tokio::test]
    async fn test_missing_template_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("my-app");

        let err = copy_tree(
            &tmp.path().join("does-not-exist"),
            &target(dest.clone(), false, Conflict::Fresh),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::MaterializationFailed { .. }));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_copy_template_uses_registry_key() {
        let tmp = tempfile::tempdir().unwrap();
        sample_template(tmp.path());
        let entry = crate::catalog::registry::find("typescript-tailwind").unwrap();
        let dest = tmp.path().join("app");

        let source = TemplateSource::local(tmp.path());
        let report = copy_template(entry, &source, &target(dest, false, Conflict::Fresh))
            .await
            .unwrap();

        assert!(report.files.contains(&PathBuf::from("package.json")));
        assert_eq!(report.directories, 4);
    }
}

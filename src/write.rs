use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::plan::RenderPlan;

/// Per-path outcome of one write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    SkippedExisting,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub status: WriteStatus,
}

/// The per-path outcome report of one scaffold write.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, WriteStatus::Written))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, WriteStatus::SkippedExisting))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, WriteStatus::Failed(_)))
    }

    /// True only when every entry was written.
    pub fn is_clean(&self) -> bool {
        self.written() == self.entries.len()
    }

    fn count(&self, pred: impl Fn(&WriteStatus) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.status)).count()
    }
}

/// Materialize a render plan under `target_dir`.
///
/// Filesystem errors are accumulated into the manifest rather than thrown:
/// partial scaffolding with a clear report beats an all-or-nothing pretense
/// the filesystem cannot honor. A directory-creation failure poisons every
/// later entry under that subtree; independent subtrees continue.
pub fn write_plan(plan: &RenderPlan, target_dir: &Path, overwrite: bool) -> Manifest {
    let mut manifest = Manifest::default();

    if let Err(e) = std::fs::create_dir_all(target_dir) {
        // Nothing is reachable without the target directory.
        for file in &plan.files {
            manifest.entries.push(ManifestEntry {
                path: file.relative_path.clone(),
                status: WriteStatus::Failed(format!(
                    "creating target directory {}: {e}",
                    target_dir.display()
                )),
            });
        }
        return manifest;
    }

    let mut failed_dirs: BTreeSet<PathBuf> = BTreeSet::new();

    for file in &plan.files {
        let rel = &file.relative_path;
        let status = write_entry(rel, &file.content, target_dir, overwrite, &mut failed_dirs);
        manifest.entries.push(ManifestEntry {
            path: rel.clone(),
            status,
        });
    }

    manifest
}

fn write_entry(
    rel: &Path,
    content: &str,
    target_dir: &Path,
    overwrite: bool,
    failed_dirs: &mut BTreeSet<PathBuf>,
) -> WriteStatus {
    if let Some(parent) = rel.parent() {
        if let Some(poisoned) = failed_dirs.iter().find(|d| parent.starts_with(d)) {
            return WriteStatus::Failed(format!(
                "skipped: directory {} could not be created",
                poisoned.display()
            ));
        }
    }

    let dest = target_dir.join(rel);

    // A directory in the way is not a skippable file and cannot be
    // overwritten by fs::write.
    if dest.is_dir() {
        return WriteStatus::Failed(format!(
            "destination {} exists and is a directory",
            rel.display()
        ));
    }

    if dest.exists() && !overwrite {
        return WriteStatus::SkippedExisting;
    }

    if let Some(parent) = rel.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(target_dir.join(parent)) {
                failed_dirs.insert(parent.to_path_buf());
                return WriteStatus::Failed(format!(
                    "creating directory {}: {e}",
                    parent.display()
                ));
            }
        }
    }

    match std::fs::write(&dest, content) {
        Ok(()) => WriteStatus::Written,
        Err(e) => WriteStatus::Failed(format!("writing {}: {e}", rel.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{PlannedFile, RenderPlan};
    use std::fs;

    fn plan_of(files: Vec<(&str, &str)>) -> RenderPlan {
        RenderPlan {
            files: files
                .into_iter()
                .map(|(path, content)| PlannedFile {
                    relative_path: PathBuf::from(path),
                    content: content.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_write_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let plan = plan_of(vec![
            ("billing/orders/src/index.mjs", "code"),
            ("billing/orders/package.json", "{}"),
        ]);

        let manifest = write_plan(&plan, dir.path(), false);
        assert!(manifest.is_clean());
        assert_eq!(manifest.written(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("billing/orders/src/index.mjs")).unwrap(),
            "code"
        );
    }

    #[test]
    fn test_existing_file_skipped_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("svc")).unwrap();
        fs::write(dir.path().join("svc/kept.txt"), "original").unwrap();

        let plan = plan_of(vec![("svc/kept.txt", "replacement"), ("svc/new.txt", "new")]);
        let manifest = write_plan(&plan, dir.path(), false);

        assert_eq!(manifest.skipped(), 1);
        assert_eq!(manifest.written(), 1);
        assert!(!manifest.is_clean());
        // Skipped file content untouched, non-colliding entry still written.
        assert_eq!(
            fs::read_to_string(dir.path().join("svc/kept.txt")).unwrap(),
            "original"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("svc/new.txt")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_existing_file_replaced_with_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.txt"), "original").unwrap();

        let plan = plan_of(vec![("app.txt", "replacement")]);
        let manifest = write_plan(&plan, dir.path(), true);

        assert!(manifest.is_clean());
        assert_eq!(
            fs::read_to_string(dir.path().join("app.txt")).unwrap(),
            "replacement"
        );
    }

    #[test]
    fn test_directory_at_destination_is_a_failure_not_a_skip() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("occupied.txt")).unwrap();

        let plan = plan_of(vec![("occupied.txt", "content")]);

        for overwrite in [false, true] {
            let manifest = write_plan(&plan, dir.path(), overwrite);
            assert_eq!(manifest.failed(), 1, "overwrite={overwrite}");
            assert_eq!(manifest.skipped(), 0, "overwrite={overwrite}");
            match &manifest.entries[0].status {
                WriteStatus::Failed(reason) => assert!(reason.contains("directory")),
                other => panic!("expected Failed, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_dir_creation_failure_poisons_subtree_only() {
        let dir = tempfile::tempdir().unwrap();
        // A file where a directory is needed makes create_dir_all fail.
        fs::write(dir.path().join("blocked"), "not a directory").unwrap();

        let plan = plan_of(vec![
            ("blocked/a.txt", "a"),
            ("blocked/deep/b.txt", "b"),
            ("open/c.txt", "c"),
        ]);
        let manifest = write_plan(&plan, dir.path(), false);

        assert_eq!(manifest.failed(), 2);
        assert_eq!(manifest.written(), 1);
        assert!(dir.path().join("open/c.txt").exists());
    }
}

//! Idempotent construction of the `project-documents/private/` tree.
//!
//! Directory creation uses `create_dir_all`, so pre-existing directories are
//! left untouched and re-runs converge on the same state. The marker file is
//! rewritten on every run with its constant content; since the content never
//! varies this is also idempotent in effect.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::layout::{GuideLayout, GITKEEP_CONTENT, PRIVATE_SUBDIRS};

/// Errors from scaffold construction.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A work-area directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The marker file could not be written.
    #[error("failed to write marker file {path}: {source}")]
    WriteMarker {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a scaffold run did, for progress output and `--json` mode.
#[derive(Debug, Default, serde::Serialize)]
pub struct ScaffoldReport {
    /// Work-area directories created by this run (relative to the root).
    pub created: Vec<String>,
    /// Work-area directories that already existed (relative to the root).
    pub existing: Vec<String>,
    /// Whether the marker file existed before this run rewrote it.
    pub marker_refreshed: bool,
}

/// Ensure the seven work-area directories and the marker file exist.
///
/// No rollback on partial failure: directories created before an error are
/// left in place, and a re-run picks up where the failed run stopped.
///
/// # Errors
///
/// Returns [`ScaffoldError`] when a directory cannot be created or the marker
/// file cannot be written.
pub fn ensure_tree(layout: &GuideLayout) -> Result<ScaffoldReport, ScaffoldError> {
    let mut report = ScaffoldReport::default();

    for name in PRIVATE_SUBDIRS {
        let dir = layout.private_subdir(name);
        let existed = dir.is_dir();
        fs::create_dir_all(&dir).map_err(|source| ScaffoldError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let rel = format!(
            "{}/{}/{name}",
            crate::layout::PROJECT_DOCUMENTS,
            crate::layout::PRIVATE_DIR
        );
        if existed {
            report.existing.push(rel);
        } else {
            report.created.push(rel);
        }
    }

    let marker = layout.gitkeep_path();
    report.marker_refreshed = marker.exists();
    fs::write(&marker, GITKEEP_CONTENT).map_err(|source| ScaffoldError::WriteMarker {
        path: marker,
        source,
    })?;

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn layout_in_temp() -> (tempfile::TempDir, GuideLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = GuideLayout::new(dir.path());
        (dir, layout)
    }

    #[test]
    fn creates_all_seven_directories_and_marker() {
        let (_dir, layout) = layout_in_temp();

        let report = ensure_tree(&layout).unwrap();
        assert_eq!(report.created.len(), 7);
        assert!(report.existing.is_empty());
        assert!(!report.marker_refreshed);

        for name in PRIVATE_SUBDIRS {
            assert!(layout.private_subdir(name).is_dir(), "missing {name}");
        }
        let content = fs::read_to_string(layout.gitkeep_path()).unwrap();
        assert_eq!(content, GITKEEP_CONTENT);
    }

    #[test]
    fn private_dir_holds_exactly_seven_dirs_and_the_marker() {
        let (_dir, layout) = layout_in_temp();
        ensure_tree(&layout).unwrap();

        let mut dirs = 0;
        let mut files = Vec::new();
        for entry in fs::read_dir(layout.private_dir()).unwrap() {
            let entry = entry.unwrap();
            if entry.file_type().unwrap().is_dir() {
                dirs += 1;
            } else {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        assert_eq!(dirs, 7);
        assert_eq!(files, vec![".gitkeep"]);
    }

    #[test]
    fn rerun_is_idempotent() {
        let (_dir, layout) = layout_in_temp();

        ensure_tree(&layout).unwrap();
        let report = ensure_tree(&layout).unwrap();

        assert!(report.created.is_empty());
        assert_eq!(report.existing.len(), 7);
        assert!(report.marker_refreshed);
    }

    #[test]
    fn rerun_restores_tampered_marker() {
        let (_dir, layout) = layout_in_temp();
        ensure_tree(&layout).unwrap();

        fs::write(layout.gitkeep_path(), "edited by hand\n").unwrap();
        ensure_tree(&layout).unwrap();

        let content = fs::read_to_string(layout.gitkeep_path()).unwrap();
        assert_eq!(content, GITKEEP_CONTENT);
    }

    #[test]
    fn partial_state_is_completed_on_rerun() {
        let (_dir, layout) = layout_in_temp();

        // Simulate an interrupted earlier run that got through two entries.
        fs::create_dir_all(layout.private_subdir("analysis")).unwrap();
        fs::create_dir_all(layout.private_subdir("architecture")).unwrap();

        let report = ensure_tree(&layout).unwrap();
        assert_eq!(report.existing.len(), 2);
        assert_eq!(report.created.len(), 5);
        for name in PRIVATE_SUBDIRS {
            assert!(layout.private_subdir(name).is_dir());
        }
    }

    #[test]
    fn pre_existing_content_is_left_alone() {
        let (_dir, layout) = layout_in_temp();

        let keep = layout.private_subdir("tasks").join("notes.md");
        fs::create_dir_all(layout.private_subdir("tasks")).unwrap();
        fs::write(&keep, "do not touch\n").unwrap();

        ensure_tree(&layout).unwrap();
        assert_eq!(fs::read_to_string(&keep).unwrap(), "do not touch\n");
    }
}

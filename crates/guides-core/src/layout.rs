//! The `project-documents/` layout model.
//!
//! Every path the tool touches derives from a single repository root held in
//! a [`GuideLayout`]. The fixed names below are the one shared definition for
//! both entry points, so the directory list and the guide repository URL
//! cannot drift between commands.

use std::path::{Path, PathBuf};

/// The directory that holds all guide-related content at the repository root.
pub const PROJECT_DOCUMENTS: &str = "project-documents";

/// The subdirectory for the host project's own (private) documents.
pub const PRIVATE_DIR: &str = "private";

/// The seven work areas created under `project-documents/private/`.
///
/// Order matters only for output; creation is independent per entry.
pub const PRIVATE_SUBDIRS: [&str; 7] = [
    "analysis",
    "architecture",
    "features",
    "project-guides",
    "reviews",
    "slices",
    "tasks",
];

/// Marker file name written at `project-documents/private/`.
pub const GITKEEP_NAME: &str = ".gitkeep";

/// Exact content of the marker file. Written verbatim on every scaffold run.
pub const GITKEEP_CONTENT: &str = "# Keep private/ in version control\n";

/// Remote repository registered as the guide submodule.
pub const GUIDE_REPO_URL: &str = "https://github.com/ecorkran/ai-project-guide.git";

/// Submodule checkout path, relative to the repository root.
///
/// Kept as a forward-slash string because it is handed to git verbatim.
pub const SUBMODULE_PATH: &str = "project-documents/ai-project-guide";

/// Resolved path layout for one host repository.
///
/// Holds the repository root and derives every other path from it, so no
/// operation ever depends on (or mutates) the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideLayout {
    root: PathBuf,
}

impl GuideLayout {
    /// Create a layout rooted at `root` (the repository top level).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root this layout is anchored to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/project-documents`.
    pub fn project_documents(&self) -> PathBuf {
        self.root.join(PROJECT_DOCUMENTS)
    }

    /// `<root>/project-documents/private`.
    pub fn private_dir(&self) -> PathBuf {
        self.project_documents().join(PRIVATE_DIR)
    }

    /// `<root>/project-documents/private/<name>` for one work area.
    pub fn private_subdir(&self, name: &str) -> PathBuf {
        self.private_dir().join(name)
    }

    /// `<root>/project-documents/private/.gitkeep`.
    pub fn gitkeep_path(&self) -> PathBuf {
        self.private_dir().join(GITKEEP_NAME)
    }

    /// `<root>/project-documents/ai-project-guide`.
    pub fn submodule_dir(&self) -> PathBuf {
        self.root.join(SUBMODULE_PATH)
    }

    /// Whether the guide submodule checkout path already exists.
    ///
    /// This is the existence guard both entry points consult before touching
    /// anything: if it returns `true`, setup performs no mutation at all.
    pub fn is_installed(&self) -> bool {
        self.submodule_dir().exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_derive_from_root() {
        let layout = GuideLayout::new("/repo");
        assert_eq!(layout.root(), Path::new("/repo"));
        assert_eq!(
            layout.project_documents(),
            PathBuf::from("/repo/project-documents")
        );
        assert_eq!(
            layout.private_dir(),
            PathBuf::from("/repo/project-documents/private")
        );
        assert_eq!(
            layout.private_subdir("tasks"),
            PathBuf::from("/repo/project-documents/private/tasks")
        );
        assert_eq!(
            layout.gitkeep_path(),
            PathBuf::from("/repo/project-documents/private/.gitkeep")
        );
        assert_eq!(
            layout.submodule_dir(),
            PathBuf::from("/repo/project-documents/ai-project-guide")
        );
    }

    #[test]
    fn submodule_dir_matches_relative_constant() {
        let layout = GuideLayout::new("/repo");
        assert_eq!(layout.submodule_dir(), Path::new("/repo").join(SUBMODULE_PATH));
    }

    #[test]
    fn is_installed_reflects_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let layout = GuideLayout::new(dir.path());
        assert!(!layout.is_installed());

        std::fs::create_dir_all(layout.submodule_dir()).unwrap();
        assert!(layout.is_installed());
    }

    #[test]
    fn subdir_list_is_the_expected_seven() {
        assert_eq!(PRIVATE_SUBDIRS.len(), 7);
        // The list is part of the on-disk contract; pin it.
        assert_eq!(
            PRIVATE_SUBDIRS,
            [
                "analysis",
                "architecture",
                "features",
                "project-guides",
                "reviews",
                "slices",
                "tasks",
            ]
        );
    }

    #[test]
    fn gitkeep_content_is_exact() {
        assert_eq!(GITKEEP_CONTENT, "# Keep private/ in version control\n");
    }
}

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Marker prefix of hidden entries.
const HIDDEN_PREFIX: char = '.';

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with(HIDDEN_PREFIX)
}

/// Delete every hidden file and directory under `root`, at any depth.
///
/// Hidden directories are removed with their contents and not descended
/// into. `root` itself is kept even if its own name is hidden. Returns the
/// number of removed entries.
pub fn remove_hidden_entries(root: &Path) -> Result<usize, SanitizeError> {
    let hidden = collect_hidden(root)?;

    for (path, is_dir) in &hidden {
        let removed = if *is_dir {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        removed.map_err(|e| SanitizeError::Remove {
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "removed hidden entry");
    }

    Ok(hidden.len())
}

/// Walk `root` and list hidden entries. The walker and its directory
/// handles are dropped before anything is deleted.
fn collect_hidden(root: &Path) -> Result<Vec<(PathBuf, bool)>, SanitizeError> {
    let mut hidden = Vec::new();
    let mut walker = WalkDir::new(root).min_depth(1).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| SanitizeError::Walk {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: e,
        })?;

        if !is_hidden(entry.file_name()) {
            continue;
        }

        // Symlinks are not followed, so a hidden link to a directory is removed as a file.
        let is_dir = entry.file_type().is_dir();
        if is_dir {
            walker.skip_current_dir();
        }
        hidden.push((entry.into_path(), is_dir));
    }

    Ok(hidden)
}

#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("failed to read directory entries under {path}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("failed to remove hidden entry {path}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "x").unwrap();
    }

    #[test]
    fn removes_top_level_hidden_files_and_dirs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "index.html");
        touch(root, ".DS_Store");
        touch(root, ".git/HEAD");

        let removed = remove_hidden_entries(root).unwrap();

        assert_eq!(removed, 2);
        assert!(root.join("index.html").exists());
        assert!(!root.join(".DS_Store").exists());
        assert!(!root.join(".git").exists());
    }

    #[test]
    fn removes_nested_hidden_entries() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "assets/app.js");
        touch(root, "assets/.cache/chunk");
        touch(root, "docs/guide/.env");
        touch(root, "docs/guide/index.html");

        remove_hidden_entries(root).unwrap();

        assert!(root.join("assets/app.js").exists());
        assert!(root.join("docs/guide/index.html").exists());
        assert!(!root.join("assets/.cache").exists());
        assert!(!root.join("docs/guide/.env").exists());
    }

    #[test]
    fn hidden_root_itself_is_kept() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join(".staging");
        touch(&root, "index.html");

        assert_eq!(remove_hidden_entries(&root).unwrap(), 0);
        assert!(root.join("index.html").exists());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = remove_hidden_entries(&tmp.path().join("absent"));

        assert!(matches!(result, Err(SanitizeError::Walk { .. })));
    }
}

//! Locate the git files whose change means a new commit SHA.
//!
//! Shared between `build.rs` (via `#[path]`) and the binary's tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Existing paths to watch for `cargo:rerun-if-changed` under `git_dir`.
///
/// `HEAD` alone only changes on checkout. Commits on a branch move the loose
/// ref `refs/heads/<branch>`, or create it when the branch so far only lives
/// in `packed-refs`; in that case the ref's directory is watched instead.
/// Missing paths are never returned, since cargo treats them as always stale.
pub fn watched_paths(git_dir: &Path) -> Vec<PathBuf> {
    let head = git_dir.join("HEAD");
    let Ok(contents) = fs::read_to_string(&head) else {
        return Vec::new();
    };

    let mut paths = vec![head];
    if let Some(reference) = contents.trim().strip_prefix("ref: ") {
        let loose = git_dir.join(reference);
        if loose.is_file() {
            paths.push(loose);
        } else if let Some(dir) = loose.parent().filter(|d| d.is_dir()) {
            paths.push(dir.to_path_buf());
        }
        let packed = git_dir.join("packed-refs");
        if packed.is_file() {
            paths.push(packed);
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_dir_with_head(head: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("HEAD"), head).unwrap();
        dir
    }

    #[test]
    fn test_branch_ref_is_watched_not_only_head() {
        let dir = git_dir_with_head("ref: refs/heads/main\n");
        fs::create_dir_all(dir.path().join("refs/heads")).unwrap();
        fs::write(dir.path().join("refs/heads/main"), "abc123\n").unwrap();
        fs::write(dir.path().join("packed-refs"), "").unwrap();

        assert_eq!(
            watched_paths(dir.path()),
            vec![
                dir.path().join("HEAD"),
                dir.path().join("refs/heads/main"),
                dir.path().join("packed-refs"),
            ]
        );
    }

    #[test]
    fn test_packed_only_branch_watches_ref_directory() {
        let dir = git_dir_with_head("ref: refs/heads/feature/x\n");
        fs::create_dir_all(dir.path().join("refs/heads/feature")).unwrap();

        assert_eq!(
            watched_paths(dir.path()),
            vec![dir.path().join("HEAD"), dir.path().join("refs/heads/feature")]
        );
    }

    #[test]
    fn test_detached_head_watches_head_only() {
        let dir = git_dir_with_head("0123456789abcdef0123456789abcdef01234567\n");
        assert_eq!(watched_paths(dir.path()), vec![dir.path().join("HEAD")]);
    }

    #[test]
    fn test_no_repository_watches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(watched_paths(&dir.path().join(".git")).is_empty());
    }
}

//! On-disk layout and raw storage operations.
//!
//! The store is three sibling directories under a working root:
//! `template/` (read-only seed payload), `ongoing/` (in-progress tasks) and
//! `done/` (completed tasks). A task's lifecycle stage is encoded purely by
//! which of the two stage directories contains its folder; there is no
//! index or cache, the filesystem is the database.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Resolved paths of one working root. Built once per invocation and passed
/// to every operation, so tests can point it at a temporary directory.
#[derive(Debug, Clone)]
pub struct Store {
    pub template: PathBuf,
    pub ongoing: PathBuf,
    pub done: PathBuf,
}

impl Store {
    /// Lay out the three stage directories relative to `root`.
    pub fn new(root: &Path) -> Self {
        Store {
            template: root.join("template"),
            ongoing: root.join("ongoing"),
            done: root.join("done"),
        }
    }

    /// Path of an in-progress task directory.
    pub fn ongoing_path(&self, name: &str) -> PathBuf {
        self.ongoing.join(name)
    }

    /// Path of a completed task directory.
    pub fn done_path(&self, name: &str) -> PathBuf {
        self.done.join(name)
    }

    /// Names of every directory entry directly under `ongoing/`, in
    /// directory-listing order. Non-directory entries are skipped; a
    /// missing `ongoing/` reads as empty.
    pub fn list_ongoing(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        if !self.ongoing.exists() {
            return Ok(names);
        }
        for entry in fs::read_dir(&self.ongoing)? {
            let entry = entry?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }
}

/// Recursively copy a directory tree. The destination must not exist yet;
/// a failure partway leaves whatever was copied in place for the caller to
/// deal with.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.path().is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Relocate a directory tree. Tries a single rename first; when that fails
/// (typically `src` and `dst` on different volumes) falls back to
/// copy-then-delete, removing the source only after the destination copy
/// completed. A failed fallback copy leaves the source intact and
/// best-effort removes the partial destination.
pub fn move_tree(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(_) => {
            if let Err(e) = copy_tree(src, dst) {
                let _ = fs::remove_dir_all(dst);
                return Err(e);
            }
            fs::remove_dir_all(src)
        }
    }
}

/// Append one line to a text file, creating it if absent.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(f, "{line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_tree_copies_nested_payload() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("a.txt"), "alpha").unwrap();
        fs::write(src.join("sub/b.txt"), "beta").unwrap();

        let dst = dir.path().join("dst");
        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "alpha");
        assert_eq!(fs::read_to_string(dst.join("sub/b.txt")).unwrap(), "beta");
        // Source is untouched.
        assert_eq!(fs::read_to_string(src.join("a.txt")).unwrap(), "alpha");
    }

    #[test]
    fn test_move_tree_relocates_and_removes_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), "alpha").unwrap();

        let dst = dir.path().join("deep").join("dst");
        move_tree(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "alpha");
    }

    #[cfg(unix)]
    #[test]
    fn test_move_tree_failed_copy_keeps_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), "alpha").unwrap();
        // A dangling symlink makes the fallback copy fail partway.
        std::os::unix::fs::symlink("missing-target", src.join("link")).unwrap();

        // A non-empty destination forces the rename to fail, so move_tree
        // takes the copy-then-delete path.
        let dst = dir.path().join("dst");
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("occupied.txt"), "blocker").unwrap();

        assert!(move_tree(&src, &dst).is_err());
        // Source intact, partial destination cleaned up.
        assert_eq!(fs::read_to_string(src.join("a.txt")).unwrap(), "alpha");
        assert!(!dst.exists());
    }

    #[test]
    fn test_append_line_creates_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tags");
        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_list_ongoing_skips_plain_files() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());
        fs::create_dir_all(store.ongoing_path("alpha")).unwrap();
        fs::write(store.ongoing.join("stray.txt"), "not a task").unwrap();

        let names = store.list_ongoing().unwrap();
        assert_eq!(names, vec!["alpha".to_string()]);
    }

    #[test]
    fn test_list_ongoing_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path());
        assert!(store.list_ongoing().unwrap().is_empty());
    }
}

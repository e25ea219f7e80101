#![cfg(test)]
//! Shared helpers for filesystem-backed tests.

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

static NEXT_DIR_ID: AtomicUsize = AtomicUsize::new(0);

/// A directory under the system temp dir that is removed on drop.
pub(crate) struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub(crate) fn new(label: &str) -> TempDir {
        let id = NEXT_DIR_ID.fetch_add(1, Ordering::Relaxed);
        let path = env::temp_dir().join(format!("gantry-test-{label}-{}-{id}", std::process::id()));
        fs::create_dir_all(&path).expect("can create the temp dir");

        TempDir { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn join(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Create a file, and any missing parent directories, under the temp dir.
    pub(crate) fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("can create parent directories");
        }
        fs::write(&path, contents).expect("can write the file");
        path
    }

    /// Create an executable script under the temp dir.
    #[cfg(unix)]
    pub(crate) fn create_executable(&self, relative: &str, contents: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.create_file(relative, contents);
        let mut permissions = fs::metadata(&path)
            .expect("the file was just created")
            .permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions).expect("can mark the script executable");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

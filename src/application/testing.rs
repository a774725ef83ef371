//! Test doubles for the resolver and the editor host.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use crate::domain::traits::{AlternateResolver, EditorHost};
use crate::domain::types::{Pane, Projections};

/// A project directory with an empty projections file at its root.
pub fn project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".projections.json"), "{}").unwrap();
    dir
}

/// Returns the same relative paths for every file.
pub struct ListResolver {
    paths: Vec<PathBuf>,
}

impl ListResolver {
    pub fn new(paths: &[&str]) -> Self {
        Self {
            paths: paths.iter().map(PathBuf::from).collect(),
        }
    }
}

impl AlternateResolver for ListResolver {
    fn alternates(&self, _path: &Path, _projections: &Projections) -> Vec<PathBuf> {
        self.paths.clone()
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub existing: HashSet<PathBuf>,
    pub pick_index: Option<usize>,
    pub fail_open: bool,
    pub panic_open: bool,
    pub panic_exists: bool,
    pub panic_show_error: bool,
    pub opened: Mutex<Vec<(PathBuf, Pane)>>,
    pub errors: Mutex<Vec<String>>,
    pub picks: AtomicUsize,
}

impl FakeHost {
    pub fn with_existing(paths: &[PathBuf]) -> Self {
        Self {
            existing: paths.iter().cloned().collect(),
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<(PathBuf, Pane)> {
        self.opened.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn pick_calls(&self) -> usize {
        self.picks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EditorHost for FakeHost {
    async fn open_file(&self, path: &Path, pane: Pane) -> Result<(), String> {
        if self.panic_open {
            panic!("editor crashed");
        }
        if self.fail_open {
            return Err("editor refused".to_string());
        }
        self.opened.lock().unwrap().push((path.to_path_buf(), pane));
        Ok(())
    }

    async fn pick(&self, _prompt: &str, candidates: &[PathBuf]) -> Result<Option<PathBuf>, String> {
        self.picks.fetch_add(1, Ordering::SeqCst);
        Ok(self.pick_index.and_then(|i| candidates.get(i).cloned()))
    }

    async fn show_error(&self, message: &str) {
        if self.panic_show_error {
            panic!("notification area missing");
        }
        self.errors.lock().unwrap().push(message.to_string());
    }

    async fn file_exists(&self, path: &Path) -> bool {
        if self.panic_exists {
            panic!("disk vanished");
        }
        self.existing.contains(path) || path.exists()
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// Nothing was there to remove.
    Absent,
}

/// Source and destination locations, addressed by record name.
pub trait FileStore {
    /// Create both locations if they are missing. Idempotent.
    fn ensure_locations(&self) -> io::Result<()>;

    /// Remove `name` from the source location.
    fn remove(&self, name: &str) -> io::Result<RemoveOutcome>;

    /// Copy `name` from source to destination, replacing any existing entry.
    /// Returns the number of bytes written.
    fn copy(&self, name: &str) -> io::Result<u64>;

    /// Whether `name` exists in the source location.
    fn exists(&self, name: &str) -> bool;
}

/// `FileStore` over two directories on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    source_dir: PathBuf,
    destination_dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(source_dir: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        DirectoryStore {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
        }
    }

    pub fn source_path(&self, name: &str) -> PathBuf {
        self.source_dir.join(name)
    }

    pub fn destination_path(&self, name: &str) -> PathBuf {
        self.destination_dir.join(name)
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }
}

impl FileStore for DirectoryStore {
    fn ensure_locations(&self) -> io::Result<()> {
        fs::create_dir_all(&self.source_dir)?;
        fs::create_dir_all(&self.destination_dir)
    }

    fn remove(&self, name: &str) -> io::Result<RemoveOutcome> {
        match fs::remove_file(self.source_path(name)) {
            Ok(()) => Ok(RemoveOutcome::Removed),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(RemoveOutcome::Absent),
            Err(error) => Err(error),
        }
    }

    fn copy(&self, name: &str) -> io::Result<u64> {
        let source = self.source_path(name);
        let destination = self.destination_path(name);
        // Copying a file onto itself truncates it.
        if is_same_file(&source, &destination) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is both source and destination", source.display()),
            ));
        }
        fs::copy(source, destination)
    }

    /// Looks at the entry itself, so a dangling symlink still counts.
    fn exists(&self, name: &str) -> bool {
        fs::symlink_metadata(self.source_path(name)).is_ok()
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

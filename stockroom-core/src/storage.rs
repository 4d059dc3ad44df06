use fs2::FileExt;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

use crate::db::Section;

/// Top-level JSON object stored in the data file
pub type Document = Map<String, Value>;

const LOCK_TIMEOUT: Duration = Duration::from_secs(5);
const LOCK_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Error type for storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Lock file is held by another process
    #[error("Timeout waiting for file lock - another process may be writing: {0:?}")]
    Locked(PathBuf),

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse JSON from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the top level of {0:?}")]
    NotAnObject(PathBuf),

    #[error("Failed to serialize data for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Handles loading and saving the shared JSON data file.
///
/// Both stores write through the same `Storage`. Every save re-reads the file
/// and overlays only the caller's section, so one store never clobbers the
/// keys owned by the other. Writes are serialized in-process by a mutex and
/// across processes by an advisory lock on `<file>.lock`.
pub struct Storage {
    file_path: PathBuf,
    lock_file_path: PathBuf,
    tmp_file_path: PathBuf,
    write_guard: Mutex<()>,
}

impl Storage {
    /// Creates a new Storage instance
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let lock_file_path = file_path.with_extension("json.lock");
        let tmp_file_path = file_path.with_extension("json.tmp");
        Self {
            file_path,
            lock_file_path,
            tmp_file_path,
            write_guard: Mutex::new(()),
        }
    }

    /// Returns the path to the data file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Acquire an exclusive lock on the file for writing
    /// Returns the lock file handle which must be held during the operation
    fn acquire_write_lock(&self) -> Result<File, StorageError> {
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.lock_file_path)
            .map_err(|e| StorageError::io(&self.lock_file_path, e))?;

        self.wait_for_lock(&lock_file, <File as FileExt>::try_lock_exclusive)?;
        Ok(lock_file)
    }

    /// Acquire a shared lock on the file for reading
    fn acquire_read_lock(&self) -> Result<Option<File>, StorageError> {
        if !self.lock_file_path.exists() {
            return Ok(None);
        }

        let lock_file = OpenOptions::new()
            .read(true)
            .open(&self.lock_file_path)
            .map_err(|e| StorageError::io(&self.lock_file_path, e))?;

        self.wait_for_lock(&lock_file, <File as FileExt>::try_lock_shared)?;
        Ok(Some(lock_file))
    }

    fn wait_for_lock(
        &self,
        lock_file: &File,
        try_lock: fn(&File) -> io::Result<()>,
    ) -> Result<(), StorageError> {
        let start = Instant::now();

        loop {
            match try_lock(lock_file) {
                Ok(()) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                    if start.elapsed() > LOCK_TIMEOUT {
                        return Err(StorageError::Locked(self.file_path.clone()));
                    }
                    std::thread::sleep(LOCK_POLL_INTERVAL);
                }
                Err(e) => return Err(StorageError::io(&self.lock_file_path, e)),
            }
        }
    }

    /// Loads the document from disk.
    ///
    /// Returns `Ok(None)` when the file does not exist yet. A file that exists
    /// but does not hold a JSON object is an error.
    pub fn load(&self) -> Result<Option<Document>, StorageError> {
        let _lock = self.acquire_read_lock()?;

        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.file_path, e)),
        };

        self.parse(&content).map(Some)
    }

    fn parse(&self, content: &str) -> Result<Document, StorageError> {
        let value: Value = serde_json::from_str(content).map_err(|source| StorageError::Parse {
            path: self.file_path.clone(),
            source,
        })?;

        match value {
            Value::Object(document) => Ok(document),
            _ => Err(StorageError::NotAnObject(self.file_path.clone())),
        }
    }

    /// Decodes one section out of a loaded document
    pub fn read_section<S: Section>(&self, document: &Document) -> Result<S, StorageError> {
        S::read_from(document).map_err(|source| StorageError::Parse {
            path: self.file_path.clone(),
            source,
        })
    }

    /// Writes one section back to disk, keeping every other top-level key
    /// exactly as it currently is on disk
    pub fn save_section<S: Section>(&self, section: &S) -> Result<(), StorageError> {
        let _guard = self.write_guard.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let mut lock_file = self.acquire_write_lock()?;

        // Write lock holder info (optional, for debugging)
        let _ = writeln!(
            lock_file,
            "Locked by PID {} at {}",
            std::process::id(),
            chrono::Utc::now().to_rfc3339()
        );

        // An unreadable or corrupt file is merged as if it were empty
        let mut document = fs::read_to_string(&self.file_path)
            .ok()
            .and_then(|content| self.parse(&content).ok())
            .unwrap_or_default();

        section
            .write_into(&mut document)
            .map_err(|source| self.serialize_error(source))?;

        let mut json = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|source| self.serialize_error(source))?;
        json.push('\n');

        self.replace_file(json.as_bytes())?;
        debug!(path = ?self.file_path, section = S::NAME, "saved section");

        // Lock is automatically released when lock_file is dropped
        Ok(())
    }

    /// Writes `<file>.tmp` in full, then renames it over the data file so a
    /// crash never leaves a half-written document behind
    fn replace_file(&self, contents: &[u8]) -> Result<(), StorageError> {
        let write_tmp = || -> io::Result<()> {
            let mut tmp = File::create(&self.tmp_file_path)?;
            tmp.write_all(contents)?;
            tmp.sync_all()
        };

        let result = write_tmp()
            .map_err(|e| StorageError::io(&self.tmp_file_path, e))
            .and_then(|()| {
                fs::rename(&self.tmp_file_path, &self.file_path)
                    .map_err(|e| StorageError::io(&self.file_path, e))
            });

        if result.is_err() {
            let _ = fs::remove_file(&self.tmp_file_path);
        }
        result
    }

    fn serialize_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Serialize {
            path: self.file_path.clone(),
            source,
        }
    }
}

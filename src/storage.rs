//! Durable storage for the persisted session id.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort: a store that cannot write logs and carries on,
//! since the cookie carrier still works without it. The file store exposes
//! fallible inherent methods for callers that want to report failures.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Key of the single durable entry, shared by every host.
pub const SESSION_ID_KEY: &str = "session_id";

/// Durable home of the `session_id` entry.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, session_id: &str);
    fn clear(&self);
}

/// In-memory store; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<Option<String>>>);

impl MemoryStore {
    #[must_use]
    pub fn with_session(session_id: &str) -> Self {
        Self(Rc::new(RefCell::new(Some(session_id.to_owned()))))
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, session_id: &str) {
        *self.0.borrow_mut() = Some(session_id.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[cfg(feature = "native")]
pub use file::{FileStore, StoreError};

#[cfg(feature = "native")]
mod file {
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    use super::SessionStore;
    use crate::session::normalize_session_id;

    #[derive(Debug, thiserror::Error)]
    pub enum StoreError {
        #[error("session file {}: {source}", .path.display())]
        Io {
            path: PathBuf,
            #[source]
            source: io::Error,
        },
    }

    /// Session id kept in a single plain-text file.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// # Errors
        ///
        /// Any I/O failure other than the file not existing.
        pub fn read(&self) -> Result<Option<String>, StoreError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => Ok(normalize_session_id(&raw)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(self.io_error(e)),
            }
        }

        /// Write the id, creating parent directories as needed.
        ///
        /// # Errors
        ///
        /// Directory creation or write failures.
        pub fn write(&self, session_id: &str) -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
            fs::write(&self.path, session_id).map_err(|e| self.io_error(e))
        }

        /// Delete the file; a missing file is not an error.
        ///
        /// # Errors
        ///
        /// Any removal failure other than the file not existing.
        pub fn remove(&self) -> Result<(), StoreError> {
            match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(self.io_error(e)),
            }
        }

        fn io_error(&self, source: io::Error) -> StoreError {
            StoreError::Io { path: self.path.clone(), source }
        }
    }

    impl SessionStore for FileStore {
        fn load(&self) -> Option<String> {
            self.read().unwrap_or_else(|e| {
                log::warn!("session store read failed: {e}");
                None
            })
        }

        fn save(&self, session_id: &str) {
            if let Err(e) = self.write(session_id) {
                log::warn!("session store write failed: {e}");
            }
        }

        fn clear(&self) {
            if let Err(e) = self.remove() {
                log::warn!("session store clear failed: {e}");
            }
        }
    }
}

//! Preference Store and OS theme signal collaborators.
//!
//! This module provides:
//! - [`PreferenceStore`], a synchronous string key-value store
//! - an in-memory store for tests and embedders
//! - a file-backed store that survives restarts (native)
//! - a `localStorage` store scoped to the page origin (wasm)
//! - [`OsThemeSignal`], the system "prefers dark" query

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to create preference directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write preference {key}: {source}")]
    Write { key: String, source: io::Error },

    #[error("localStorage is not available")]
    StorageUnavailable,

    #[error("failed to write preference {key} to localStorage: {message}")]
    Storage { key: String, message: String },
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================
// File-backed store (for native platforms)
// ============================================

/// One file per key under `dir`.
#[derive(Clone, Debug)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Per-user data directory, or `cache/prefs` when none is known.
    pub fn default_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join("paydesk").join("prefs");
        }

        PathBuf::from("cache").join("prefs")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.pref", sanitize_key(key)))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        fs::create_dir_all(&self.dir).map_err(|source| PreferenceError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(self.path_for(key), value).map_err(|source| PreferenceError::Write {
            key: key.to_string(),
            source,
        })
    }
}

// ============================================
// localStorage store (for the web build)
// ============================================

/// Browser `localStorage`, shared by every page of the origin.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferenceStore;

#[cfg(target_arch = "wasm32")]
impl LocalStoragePreferenceStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStoragePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = Self::storage().ok_or(PreferenceError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| PreferenceError::Storage {
                key: key.to_string(),
                message: format!("{err:?}"),
            })
    }
}

/// The store that survives reloads on the current target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformPreferenceStore = FilePreferenceStore;

#[cfg(target_arch = "wasm32")]
pub type PlatformPreferenceStore = LocalStoragePreferenceStore;

/// Opens the platform store. `data_dir` only matters on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store(data_dir: &Path) -> PlatformPreferenceStore {
    FilePreferenceStore::new(data_dir)
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store(_data_dir: &Path) -> PlatformPreferenceStore {
    LocalStoragePreferenceStore
}

/// Sanitize a preference key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

// ============================================
// OS theme signal
// ============================================

/// The operating system's light/dark preference. Change notifications are
/// delivered by the host to the theme controller.
pub trait OsThemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// A signal with a value fixed by configuration, for hosts without a
/// native query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedOsTheme {
    pub prefers_dark: bool,
}

impl FixedOsTheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }
}

impl OsThemeSignal for FixedOsTheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

use anyhow::{Context, Result};
use rust_i18n::t;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cookie;

/// The cookie store: a raw `"; "`-joined header that pairs are read from
/// and written into.
pub trait CookieStore {
    /// The full header string, or `None` when no cookies exist.
    fn header(&self) -> Result<Option<String>>;

    /// Creates or overwrites a single pair, scoped to path `/`.
    fn set(&self, name: &str, value: &str) -> Result<()>;
}

/// Cookie jar persisted as a single header line in a plain file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CookieStore for FileStore {
    fn header(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let raw = raw.trim_end();
                if raw.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(raw.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| t!("error_store_read", path = self.path.display().to_string())),
        }
    }

    fn set(&self, name: &str, value: &str) -> Result<()> {
        let current = self.header()?.unwrap_or_default();
        let updated = cookie::set_pair(&current, name, value);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                t!("error_store_write", path = self.path.display().to_string())
            })?;
        }
        fs::write(&self.path, updated)
            .with_context(|| t!("error_store_write", path = self.path.display().to_string()))
    }
}

/// Picks the jar location: an explicit override, the
/// `LANGREDIRECT_COOKIE_FILE` env var (useful for testing), or the user
/// data directory.
pub fn create_store(override_path: Option<&Path>) -> Box<dyn CookieStore> {
    if let Some(path) = override_path {
        return Box::new(FileStore::new(path.to_path_buf()));
    }
    if let Ok(path) = std::env::var("LANGREDIRECT_COOKIE_FILE") {
        return Box::new(FileStore::new(PathBuf::from(path)));
    }

    let data_dir = dirs::data_dir().or_else(|| {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join(".local/share"))
    });
    let base_dir = match data_dir {
        Some(dir) => dir,
        None => {
            eprintln!(
                "langredirect: warning: could not determine data directory, using /tmp/langredirect"
            );
            PathBuf::from("/tmp")
        }
    }
    .join("langredirect");
    Box::new(FileStore::new(base_dir.join("cookies")))
}

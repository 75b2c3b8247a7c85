// vitrine/src/storage/file.rs

use std::fs::{self, File};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use super::KeyValueStorage;
use crate::errors::{AppError, Result};

/// Directory-backed storage: each key lives in `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file which is synced and then renamed over
/// the target, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
  dir: PathBuf,
}

impl FileStorage {
  /// Opens (and creates if needed) the storage directory.
  pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
    let dir = dir.into();
    fs::create_dir_all(&dir)?;
    debug!(dir = %dir.display(), "File storage opened.");
    Ok(Self { dir })
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  fn path_for(&self, key: &str) -> Result<PathBuf> {
    let valid = !key.is_empty()
      && key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
      && !key.starts_with('.');
    if !valid {
      return Err(AppError::Storage(format!("Invalid storage key '{}'", key)));
    }
    Ok(self.dir.join(format!("{}.json", key)))
  }
}

impl KeyValueStorage for FileStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let path = self.path_for(key)?;
    match fs::read_to_string(&path) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  #[instrument(name = "FileStorage::set", skip(self, value), fields(bytes = value.len()))]
  fn set(&self, key: &str, value: &str) -> Result<()> {
    let path = self.path_for(key)?;
    let tmp_path = self.dir.join(format!(".{}.json.tmp", key));

    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(value.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, &path)?;
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<()> {
    let path = self.path_for(key)?;
    match fs::remove_file(&path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}

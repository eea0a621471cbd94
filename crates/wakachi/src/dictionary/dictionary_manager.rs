//! Dictionary Management Module
//!
//! Resolves and loads the vibrato-rkyv dictionary the segmenter runs on.
//! Preset dictionaries (IPADIC, UniDic) are downloaded into an OS cache
//! directory on first use and read from there afterwards; a local dictionary
//! file can be pointed at directly instead.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::{LoadMode, PresetDictionaryKind};

use crate::errors::DictionaryError;

/// Loads a dictionary exactly once and hands out shared references to it.
pub struct DictionaryManager {
  /// Where downloaded preset dictionaries live
  cache_dir: PathBuf,

  /// Preset to download/load; `None` when a local file is used
  preset_kind: Option<PresetDictionaryKind>,

  /// Local dictionary file; `None` when a preset is used
  local_path: Option<PathBuf>,

  /// Memoized load result. DictionaryError is Clone, so a failed first
  /// load is cached and returned to every subsequent caller as well.
  loaded: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Creates a manager for a preset dictionary.
  ///
  /// # Errors
  /// Returns an error if no OS cache directory can be resolved.
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self {
      cache_dir: default_cache_dir()?,
      preset_kind: Some(preset_kind),
      local_path: None,
      loaded: OnceLock::new(),
    })
  }

  /// Creates a manager for a local dictionary file.
  ///
  /// # Errors
  /// Returns an error if `path` is not an existing file.
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();
    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path.display().to_string()));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      preset_kind: None,
      local_path: Some(path),
      loaded: OnceLock::new(),
    })
  }

  /// The directory preset dictionaries are cached under.
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Loads the dictionary, downloading the preset on the first run.
  ///
  /// The first call performs the actual load; every later call returns a
  /// clone of the cached `Arc<Dictionary>` (or the cached error).
  ///
  /// # Errors
  /// Returns an error if the download or the load fails.
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.loaded.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match (&self.local_path, self.preset_kind) {
      (Some(path), _) => Dictionary::from_path(path, LoadMode::TrustCache)
        .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e))),

      (None, Some(preset_kind)) => self.load_from_preset(preset_kind),

      _ => Err(DictionaryError::InvalidPathOrInvalidPresetKind(
        self.cache_dir.clone(),
        self.preset_kind,
      )),
    }
  }

  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    let dict_dir = self.cache_dir.join(preset_kind.name());

    tracing::info!(dict_dir = %dict_dir.display(), "辞書をロードします（初回はダウンロード）");

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// OS ごとのデフォルト辞書キャッシュディレクトリー
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/wakachi/dict`                       |
/// | macOS   | `~/Library/Caches/wakachi/dict`               |
/// | Windows | `C:\Users\{user}\AppData\Local\wakachi\dict`  |
fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;
  Ok(base.join("wakachi").join("dict"))
}

/// `vibrato_rkyv::Dictionary` does not implement `Debug`, so show meta
/// information only.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("preset_kind", &self.preset_kind)
      .field("local_path", &self.local_path)
      .field("loaded", &self.loaded.get().is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_local_dictionary_is_rejected() {
    let result = DictionaryManager::from_local_path("/sonzai/shinai/dict.rkyv");
    assert!(matches!(result, Err(DictionaryError::DictionaryNotFound(_))));
  }

  #[test]
  fn preset_manager_resolves_cache_dir() {
    let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
      .expect("cache dir should resolve on any supported OS");
    assert!(manager.cache_dir().ends_with("wakachi/dict"));
  }

  #[test]
  #[cfg_attr(not(feature = "with_dict_tests"), ignore)]
  fn preset_load_is_memoized() {
    let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
    let first = manager.load().expect("dictionary should load");
    let second = manager.load().expect("cached dictionary should load");
    assert!(Arc::ptr_eq(&first, &second));
  }
}

//! Segmentation Service
//!
//! Owns the process-wide segmenter singleton. The dictionary load is
//! expensive, so the segmenter is built on the first request that needs it
//! and shared read-only afterwards.

use std::sync::{Arc, Mutex, OnceLock};

use tracing::info;
use wakachi::Segmenter;
use wakachi::models::Morpheme;

use crate::config::{Config, Preset};
use crate::errors::{ApiError, Result};

/// Common interface for the segmentation service
///
/// This trait allows swapping the production implementation
/// (`LazySegmentService`) with test stubs/mocks.
pub trait SegmentService: Send + Sync {
  /// Segments `text` into morphemes in text order
  ///
  /// # Errors
  /// Returns an error if the segmenter cannot be constructed
  fn segment(&self, text: &str) -> Result<Vec<Morpheme>>;
}

/// Converts Preset to PresetDictionaryKind of vibrato-rkyv
///
/// Conversion is done in the service layer so that the config layer does not depend on vibrato
#[must_use]
fn preset_to_vibrato_kind(preset: &Preset) -> vibrato_rkyv::dictionary::PresetDictionaryKind {
  use vibrato_rkyv::dictionary::PresetDictionaryKind;
  match preset {
    Preset::Ipadic => PresetDictionaryKind::Ipadic,
    Preset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
    Preset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
  }
}

/// Fallible one-time initialization cell
///
/// A `OnceLock` holds the value; a separate mutex serializes construction so
/// that concurrent first callers run the builder at most once when it
/// succeeds. A failed build leaves the cell empty and the next caller runs
/// the builder again.
struct GuardedCell<T> {
  init: Mutex<()>,
  cell: OnceLock<T>,
}

impl<T: Clone> GuardedCell<T> {
  fn new() -> Self {
    Self { init: Mutex::new(()), cell: OnceLock::new() }
  }

  fn is_set(&self) -> bool {
    self.cell.get().is_some()
  }

  /// Returns the stored value, running `build` under the init lock if the
  /// cell is still empty.
  fn get_or_try_init(&self, build: impl FnOnce() -> Result<T>) -> Result<T> {
    if let Some(value) = self.cell.get() {
      return Ok(value.clone());
    }

    let _guard =
      self.init.lock().map_err(|_| ApiError::internal("初期化ロックが破損しています"))?;

    // Another caller may have finished construction while we waited
    if let Some(value) = self.cell.get() {
      return Ok(value.clone());
    }

    let value = build()?;

    // Cannot already be set: construction is serialized by the guard
    let _ = self.cell.set(value.clone());

    Ok(value)
  }
}

/// Lazily-initialized segmentation service
///
/// The segmenter singleton lives in a [`GuardedCell`]: the expensive
/// dictionary load runs at most once per process even under concurrent
/// first requests, and reads are lock-free afterwards.
///
/// A failed construction is not cached — the cell stays empty and the next
/// request runs a fresh load attempt (each attempt builds its own
/// `DictionaryManager`, so the manager-level error memoization never pins a
/// failure across attempts).
pub struct LazySegmentService {
  preset: Preset,
  segmenter: GuardedCell<Arc<Segmenter>>,
}

impl LazySegmentService {
  /// Creates the service without loading anything
  #[must_use]
  pub fn new(config: &Config) -> Self {
    Self { preset: config.preset, segmenter: GuardedCell::new() }
  }

  /// Whether the segmenter has been constructed yet
  #[must_use]
  pub fn is_initialized(&self) -> bool {
    self.segmenter.is_set()
  }

  /// Returns the shared segmenter, constructing it on the first call
  ///
  /// # Errors
  /// Returns an error if the dictionary download/load fails.
  fn segmenter(&self) -> Result<Arc<Segmenter>> {
    self.segmenter.get_or_try_init(|| {
      info!(preset = ?self.preset, "セグメンターを初期化します（初回リクエスト）");

      let kind = preset_to_vibrato_kind(&self.preset);
      let segmenter = Arc::new(Segmenter::from_preset(kind).map_err(ApiError::from)?);

      info!("セグメンターを初期化しました");

      Ok(segmenter)
    })
  }
}

impl SegmentService for LazySegmentService {
  fn segment(&self, text: &str) -> Result<Vec<Morpheme>> {
    let segmenter = self.segmenter()?;
    Ok(segmenter.segment(text))
  }
}

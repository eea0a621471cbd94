//! Segmenter using vibrato

use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::dictionary::DictionaryManager;
use crate::errors::WakachiResult;
use crate::models::Morpheme;

/// Japanese segmenter backed by vibrato-rkyv
///
/// - Holds only the tokenizer (which shares the dictionary via `Arc`)
/// - `Clone + Send + Sync`, read-only after construction
#[derive(Clone)]
pub struct Segmenter {
  inner: VibratoImpl,
}

impl Segmenter {
  /// Builds a segmenter on a preset dictionary.
  ///
  /// The dictionary is downloaded into the OS cache directory on the first
  /// run, which can take a while; callers should construct lazily.
  ///
  /// # Errors
  /// Returns an error if the dictionary cannot be downloaded or loaded.
  pub fn from_preset(kind: PresetDictionaryKind) -> WakachiResult<Self> {
    let manager = DictionaryManager::with_preset(kind)?;
    let dict = manager.load()?;
    Ok(Self::from_shared_dictionary(dict))
  }

  /// Builds a segmenter on an already-loaded dictionary.
  #[must_use]
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self { inner: VibratoImpl::from_shared_dictionary(dict) }
  }

  /// Segments `text` into morphemes in left-to-right order.
  ///
  /// Empty or whitespace-only input yields an empty vector, not an error.
  #[must_use]
  pub fn segment(&self, text: &str) -> Vec<Morpheme> {
    if text.trim().is_empty() {
      return Vec::new();
    }

    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    debug!(num_tokens = worker.num_tokens(), "分かち書き完了");

    let mut morphemes = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      morphemes.push(Morpheme::new(token.surface(), token.feature()));
    }

    morphemes
  }
}

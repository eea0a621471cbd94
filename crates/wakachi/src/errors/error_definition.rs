//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// 辞書関連のエラー
///
/// Vibrato では ipadic, unidic 等のプリセット辞書とローカル辞書ファイルを使用可能。
/// ロード結果は OnceLock にキャッシュされるため Clone を実装する。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// 辞書パスが不正または辞書種別が不正
  #[error("辞書パスまたは辞書種別が不正です: path={0}, preset_kind={1:?}")]
  InvalidPathOrInvalidPresetKind(PathBuf, Option<PresetDictionaryKind>),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// プリセット辞書のダウンロード失敗
  #[error("プリセット辞書のダウンロードに失敗しました: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 分かち書き（トークナイザー）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TokenizerError {
  /// 辞書エラー（ロード失敗等）
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),
}

/// wakachi クレートの統合エラー型
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum WakachiError {
  /// 辞書関連のエラー
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),

  /// トークナイザー関連のエラー
  #[error("トークナイザーエラー: {0}")]
  Tokenizer(#[from] TokenizerError),
}

/// Result 型エイリアス
pub type WakachiResult<T> = Result<T, WakachiError>;

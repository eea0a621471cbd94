//! tokenizer モジュール
pub mod vibrato_segmenter;

/// 再エクスポート
pub use vibrato_segmenter::Segmenter;

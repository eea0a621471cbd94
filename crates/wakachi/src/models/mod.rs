//! モデルモジュール
pub mod model_definition;

/// 再エクスポート
pub use model_definition::Morpheme;

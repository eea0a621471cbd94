//! wakachi 分かち書きライブラリー
//!
//! vibrato-rkyv を用いた日本語テキストの分かち書き（形態素分割）を行う

/// 辞書モジュール - 形態素解析用辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - WakachiError, WakachiResult等のエラー型を定義
pub mod errors;

/// フィルターモジュール - 品詞フィルター（すべて / 名詞と動詞のみ）
pub mod filter;

/// データモデルモジュール - Morpheme等のデータ構造を定義
pub mod models;

/// トークナイザーモジュール - vibrato-rkyvを用いた分かち書きセグメンター
pub mod tokenizer;

/// 再エクスポート
pub use errors::{WakachiError, WakachiResult};
pub use filter::PosFilter;
pub use models::Morpheme;
pub use tokenizer::Segmenter;

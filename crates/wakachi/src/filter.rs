//! Part-of-speech filter
//!
//! Selects which morphemes survive into the rendered result. The wire tag
//! (what the form submits) and the localized label (what the user sees) are
//! kept separate on purpose.

use crate::models::Morpheme;

/// 名詞の大分類名
const POS_NOUN: &str = "名詞";
/// 動詞の大分類名
const POS_VERB: &str = "動詞";

/// 品詞フィルターモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosFilter {
  /// すべての形態素を表示
  #[default]
  All,
  /// 名詞と動詞のみ表示
  NounVerb,
}

impl PosFilter {
  /// フォームが送信するワイヤー値からパースする
  ///
  /// 未知の値や欠落はエラーにせず `All` に倒す。
  #[must_use]
  pub fn from_tag(tag: &str) -> Self {
    match tag {
      "名詞動詞" => Self::NounVerb,
      _ => Self::All,
    }
  }

  /// ワイヤー値（`<option value>` に入る文字列）
  #[must_use]
  pub fn as_tag(&self) -> &'static str {
    match self {
      Self::All => "ALL",
      Self::NounVerb => "名詞動詞",
    }
  }

  /// 表示ラベル（`<option>` のテキスト）
  #[must_use]
  pub fn label(&self) -> &'static str {
    match self {
      Self::All => "すべて表示",
      Self::NounVerb => "名詞と動詞のみ",
    }
  }

  /// この形態素を残すかどうか
  #[must_use]
  pub fn keep(&self, morpheme: &Morpheme) -> bool {
    match self {
      Self::All => true,
      Self::NounVerb => {
        let pos = morpheme.major_pos();
        pos == POS_NOUN || pos == POS_VERB
      }
    }
  }

  /// 形態素列にフィルターを適用する（相対順序は保たれる）
  #[must_use]
  pub fn apply(&self, morphemes: Vec<Morpheme>) -> Vec<Morpheme> {
    morphemes.into_iter().filter(|m| self.keep(m)).collect()
  }
}

//! Result Row Definition

use serde::Serialize;
use wakachi::models::Morpheme;

/// 結果テーブルの 1 行（表層形と表示用品詞のペア）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
  /// 表層形
  pub surface: String,
  /// 表示用の品詞文字列（大分類-細分類）
  pub pos: String,
}

impl From<&Morpheme> for ResultRow {
  fn from(morpheme: &Morpheme) -> Self {
    Self { surface: morpheme.surface.clone(), pos: morpheme.display_pos() }
  }
}

impl ResultRow {
  /// 形態素列を行のリストに変換する（順序は保たれる）
  #[must_use]
  pub fn from_morphemes(morphemes: &[Morpheme]) -> Vec<Self> {
    morphemes.iter().map(Self::from).collect()
  }

  /// 表層形だけを改行区切りで並べたプレーンテキスト（縦列コピー用）
  #[must_use]
  pub fn surface_dump(rows: &[Self]) -> String {
    rows.iter().map(|row| row.surface.as_str()).collect::<Vec<_>>().join("\n")
  }
}

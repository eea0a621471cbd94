//! Morpheme Model Definition

use serde::Serialize;

/// 素性文字列の中で品詞（大分類）が入る位置
const IDX_POS: usize = 0;

/// 品詞レベルが入る素性フィールド数（大分類＋細分類1〜3）
///
/// MeCab/IPAdic 形式では 5 番目以降は活用形・原形・読みなので
/// 品詞表示には使わない。
const POS_LEVEL_FIELDS: usize = 4;

/// 表示用に結合する品詞レベル数
///
/// 辞書によって細分類の深さが異なるため、大分類＋最初の細分類の
/// 2 レベルまでを表示対象とする。
const DISPLAY_POS_LEVELS: usize = 2;

/// 分かち書き結果の 1 形態素
///
/// 表層形と、辞書が返すカンマ区切りの素性文字列を保持する。
/// 品詞情報は素性文字列から導出する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Morpheme {
  /// 表層形（入力テキストに現れる文字列そのもの）
  pub surface: String,
  /// 素性（品詞情報を含むカンマ区切り文字列）
  pub feature: String,
}

impl Morpheme {
  /// Creates a morpheme from a surface form and a raw feature string.
  #[must_use]
  pub fn new(surface: impl Into<String>, feature: impl Into<String>) -> Self {
    Self { surface: surface.into(), feature: feature.into() }
  }

  /// 品詞の大分類（素性の先頭フィールド、例: 名詞, 動詞）
  ///
  /// 素性が空の場合は空文字列を返す。
  #[must_use]
  pub fn major_pos(&self) -> &str {
    self.feature.split(',').nth(IDX_POS).unwrap_or("")
  }

  /// 表示用の品詞文字列
  ///
  /// 素性の先頭から、空でも `*` でもないレベルを最大 2 つ取り、
  /// ハイフンで結合する（例: `名詞-一般`）。有効なレベルが 1 つしか
  /// なければそれ単独、1 つもなければ空文字列を返す。
  #[must_use]
  pub fn display_pos(&self) -> String {
    let levels: Vec<&str> = self
      .feature
      .split(',')
      .take(POS_LEVEL_FIELDS)
      .filter(|level| !level.is_empty() && *level != "*")
      .take(DISPLAY_POS_LEVELS)
      .collect();

    levels.join("-")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn major_pos_is_first_feature_field() {
    let m = Morpheme::new("東京", "名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー");
    assert_eq!(m.major_pos(), "名詞");
  }

  #[test]
  fn major_pos_of_empty_feature_is_empty() {
    let m = Morpheme::new("x", "");
    assert_eq!(m.major_pos(), "");
    assert_eq!(m.display_pos(), "");
  }

  #[test]
  fn display_pos_joins_first_two_levels() {
    let m = Morpheme::new("東京", "名詞,固有名詞,地域,一般,*,*,東京");
    assert_eq!(m.display_pos(), "名詞-固有名詞");
  }

  #[test]
  fn display_pos_skips_star_levels() {
    // UniDic系では細分類が * で埋まることがある
    let m = Morpheme::new("の", "助詞,*,*,*,*,*,の,ノ,ノ");
    assert_eq!(m.display_pos(), "助詞");
  }

  #[test]
  fn display_pos_of_flat_feature_is_the_feature() {
    let m = Morpheme::new("走る", "動詞");
    assert_eq!(m.display_pos(), "動詞");
  }

  #[test]
  fn morpheme_serializes_surface_and_feature() {
    let m = Morpheme::new("食べる", "動詞,自立,*,*,一段,基本形,食べる,タベル,タベル");
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains("\"surface\":\"食べる\""));
    assert!(json.contains("\"feature\""));
  }
}

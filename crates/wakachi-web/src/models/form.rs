//! リクエストフォーム定義

use serde::Deserialize;
use wakachi::filter::PosFilter;

/// 分かち書きフォームの送信内容
///
/// どちらのフィールドも欠落時はデフォルト値に倒す（テキストは空文字列、
/// フィルターは ALL）。リクエストを拒否することはない。
#[derive(Debug, Deserialize)]
pub struct SegmentForm {
  /// 解析対象のテキスト
  #[serde(default)]
  pub text: String,
  /// 品詞フィルターのワイヤー値
  #[serde(default)]
  pub pos_filter: String,
}

impl SegmentForm {
  /// ワイヤー値をパースしたフィルターモード（未知の値は ALL）
  #[must_use]
  pub fn filter(&self) -> PosFilter {
    PosFilter::from_tag(&self.pos_filter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_full_form() {
    let form: SegmentForm =
      serde_json::from_str(r#"{"text": "東京", "pos_filter": "ALL"}"#).unwrap();
    assert_eq!(form.text, "東京");
    assert_eq!(form.filter(), PosFilter::All);
  }

  #[test]
  fn missing_fields_default() {
    // serde(default) なので空オブジェクトでもエラーにならない
    let form: SegmentForm = serde_json::from_str("{}").unwrap();
    assert_eq!(form.text, "");
    assert_eq!(form.filter(), PosFilter::All);
  }

  #[test]
  fn noun_verb_tag_selects_noun_verb_filter() {
    let form = SegmentForm { text: "本を読む".to_string(), pos_filter: "名詞動詞".to_string() };
    assert_eq!(form.filter(), PosFilter::NounVerb);
  }

  #[test]
  fn unknown_tag_falls_back_to_all() {
    let form = SegmentForm { text: String::new(), pos_filter: "bogus".to_string() };
    assert_eq!(form.filter(), PosFilter::All);
  }
}

//! フィルターパイプラインの統合テスト
//!
//! 辞書をロードせず、合成した形態素列に対して
//! フィルターと表示用品詞導出の組み合わせを検証する。

use wakachi::filter::PosFilter;
use wakachi::models::Morpheme;

/// IPAdic 形式の素性を持つ短文の形態素列
fn textbook_sentence() -> Vec<Morpheme> {
  vec![
    Morpheme::new("学生", "名詞,一般,*,*,*,*,学生,ガクセイ,ガクセイ"),
    Morpheme::new("が", "助詞,格助詞,一般,*,*,*,が,ガ,ガ"),
    Morpheme::new("図書館", "名詞,一般,*,*,*,*,図書館,トショカン,トショカン"),
    Morpheme::new("で", "助詞,格助詞,一般,*,*,*,で,デ,デ"),
    Morpheme::new("勉強", "名詞,サ変接続,*,*,*,*,勉強,ベンキョウ,ベンキョー"),
    Morpheme::new("する", "動詞,自立,*,*,サ変・スル,基本形,する,スル,スル"),
    Morpheme::new("。", "記号,句点,*,*,*,*,。,。,。"),
  ]
}

#[test]
fn all_filter_is_identity() {
  let input = textbook_sentence();
  let output = PosFilter::All.apply(input.clone());
  assert_eq!(output, input);
}

#[test]
fn noun_verb_filter_drops_particles_and_symbols() {
  let output = PosFilter::NounVerb.apply(textbook_sentence());
  let surfaces: Vec<&str> = output.iter().map(|m| m.surface.as_str()).collect();
  assert_eq!(surfaces, vec!["学生", "図書館", "勉強", "する"]);
}

#[test]
fn filtered_output_is_a_subsequence() {
  let input = textbook_sentence();
  let output = PosFilter::NounVerb.apply(input.clone());

  let mut remaining = input.iter();
  for kept in &output {
    assert!(remaining.any(|m| m == kept), "order was not preserved for {}", kept.surface);
  }
}

#[test]
fn display_pos_of_filtered_rows() {
  let output = PosFilter::NounVerb.apply(textbook_sentence());
  let pos: Vec<String> = output.iter().map(Morpheme::display_pos).collect();
  assert_eq!(pos, vec!["名詞-一般", "名詞-一般", "名詞-サ変接続", "動詞-自立"]);
}

#[test]
fn empty_sequence_stays_empty_for_both_modes() {
  assert!(PosFilter::All.apply(Vec::new()).is_empty());
  assert!(PosFilter::NounVerb.apply(Vec::new()).is_empty());
}

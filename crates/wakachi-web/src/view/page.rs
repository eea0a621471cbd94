//! Page Rendering
//!
//! Renders the single form page server-side. The page echoes the submitted
//! text back into the textarea, keeps the filter selection, and shows the
//! result table plus a newline-joined surface dump for copy-paste.

use std::fmt::Write;

use wakachi::filter::PosFilter;

use crate::models::ResultRow;

/// ページタイトル兼見出し
const PAGE_TITLE: &str = "日文教科書文本分詞工具";

/// テキストエリアのプレースホルダー
const TEXTAREA_PLACEHOLDER: &str = "ここに日文教科書の一節を入力してください。";

/// HTML の特殊文字をエスケープする
///
/// 属性値にも埋め込むため引用符もエスケープ対象。
#[must_use]
pub fn escape_html(raw: &str) -> String {
  let mut escaped = String::with_capacity(raw.len());
  for c in raw.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

/// フォームページ全体を描画する
///
/// `rows` が空のときは結果セクションを丸ごと省略する（初期表示と同じ）。
#[must_use]
pub fn render_page(text: &str, selected: PosFilter, rows: &[ResultRow]) -> String {
  let mut html = String::with_capacity(2048);

  html.push_str(
    "<!doctype html>\n\
     <html lang=\"ja\">\n\
     <head>\n\
     <meta charset=\"UTF-8\">\n",
  );
  let _ = writeln!(html, "<title>{PAGE_TITLE}</title>");
  html.push_str(
    "<style>\n\
     body { font-family: sans-serif; margin: 2em; }\n\
     textarea { width: 100%; height: 150px; }\n\
     table { width: 100%; border-collapse: collapse; margin-top: 1em; }\n\
     th, td { border: 1px solid #ccc; padding: 5px; text-align: left; }\n\
     select { margin-top: 1em; }\n\
     pre { background: #f9f9f9; padding: 10px; white-space: pre-wrap; }\n\
     </style>\n\
     </head>\n\
     <body>\n",
  );
  let _ = writeln!(html, "<h1>{PAGE_TITLE}</h1>");

  html.push_str("<form method=\"post\">\n");
  let _ = writeln!(
    html,
    "<textarea name=\"text\" placeholder=\"{TEXTAREA_PLACEHOLDER}\">{}</textarea><br>",
    escape_html(text)
  );
  html.push_str("<label for=\"pos_filter\">品詞フィルター：</label>\n<select name=\"pos_filter\">\n");

  for option in [PosFilter::All, PosFilter::NounVerb] {
    let selected_attr = if option == selected { " selected" } else { "" };
    let _ = writeln!(
      html,
      "<option value=\"{}\"{}>{}</option>",
      option.as_tag(),
      selected_attr,
      option.label()
    );
  }

  html.push_str(
    "</select><br>\n\
     <button type=\"submit\">分詞実行</button>\n\
     </form>\n",
  );

  if !rows.is_empty() {
    html.push_str("<h2>分詞結果</h2>\n<table>\n<tr><th>表層</th><th>品詞</th></tr>\n");
    for row in rows {
      let _ = writeln!(
        html,
        "<tr><td>{}</td><td>{}</td></tr>",
        escape_html(&row.surface),
        escape_html(&row.pos)
      );
    }
    html.push_str("</table>\n");

    let _ = writeln!(
      html,
      "<h3>📋 表層（縦列コピー用）</h3>\n<pre>{}</pre>",
      escape_html(&ResultRow::surface_dump(rows))
    );
  }

  html.push_str("</body>\n</html>\n");
  html
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escape_handles_special_characters() {
    assert_eq!(escape_html("a & b"), "a &amp; b");
    assert_eq!(
      escape_html("<script>\"x\"</script>"),
      "&lt;script&gt;&quot;x&quot;&lt;/script&gt;"
    );
    assert_eq!(escape_html("日本語はそのまま"), "日本語はそのまま");
  }

  #[test]
  fn empty_page_has_no_result_section() {
    let page = render_page("", PosFilter::All, &[]);
    assert!(page.contains("<form method=\"post\">"));
    assert!(page.contains(PAGE_TITLE));
    assert!(!page.contains("分詞結果"));
  }

  #[test]
  fn submitted_text_is_echoed_into_textarea() {
    let page = render_page("吾輩は猫である", PosFilter::All, &[]);
    assert!(page.contains(">吾輩は猫である</textarea>"));
  }

  #[test]
  fn selected_filter_is_preserved() {
    let page = render_page("", PosFilter::NounVerb, &[]);
    assert!(page.contains("<option value=\"名詞動詞\" selected>名詞と動詞のみ</option>"));
    assert!(page.contains("<option value=\"ALL\">すべて表示</option>"));
  }

  #[test]
  fn rows_render_as_table_and_dump() {
    let rows = vec![
      ResultRow { surface: "本".to_string(), pos: "名詞-一般".to_string() },
      ResultRow { surface: "読む".to_string(), pos: "動詞-自立".to_string() },
    ];
    let page = render_page("本を読む", PosFilter::NounVerb, &rows);
    assert!(page.contains("<tr><td>本</td><td>名詞-一般</td></tr>"));
    assert!(page.contains("<tr><td>読む</td><td>動詞-自立</td></tr>"));
    assert!(page.contains("<pre>本\n読む</pre>"));
  }

  #[test]
  fn user_text_is_escaped() {
    let page = render_page("<b>bold</b>", PosFilter::All, &[]);
    assert!(!page.contains("<b>bold</b>"));
    assert!(page.contains("&lt;b&gt;bold&lt;/b&gt;"));
  }
}

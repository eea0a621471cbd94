//! HTTPハンドラー定義

use axum::{Form, extract::State, response::Html};
use tracing::{debug, error, info};
use wakachi::filter::PosFilter;

use crate::errors::ApiError;
use crate::models::{ResultRow, SegmentForm};
use crate::view::render_page;

use super::state::AppState;

/// GET / エンドポイント
///
/// 空のフォームページを返す。セグメンターには一切触れない。
pub async fn get_index() -> Html<String> {
  Html(render_page("", PosFilter::All, &[]))
}

/// POST / エンドポイント
///
/// フォームで送信されたテキストを分かち書きし、フィルターを適用した
/// 結果テーブル付きのページを返す。
///
/// # Form Fields
/// - `text` - 解析対象のテキスト（欠落時は空文字列）
/// - `pos_filter` - `ALL` または `名詞動詞`（欠落・未知の値は ALL）
///
/// # Response
/// - 200 OK: 描画成功（結果が空でも 200）
/// - 500 Internal Server Error: 辞書ロード・分かち書きの失敗
pub async fn post_index(
  State(state): State<AppState>,
  Form(form): Form<SegmentForm>,
) -> Result<Html<String>, ApiError> {
  debug!(text_len = form.text.len(), pos_filter = %form.pos_filter, "分詞リクエストを受信");

  let filter = form.filter();
  let text = form.text;

  // CPUバウンドな処理を spawn_blocking で実行
  // 初回リクエストは辞書ロードも含むため、非同期ランタイムをブロックしないよう分離
  let service = state.service.clone();
  let segment_text = text.clone();

  let morphemes =
    tokio::task::spawn_blocking(move || service.segment(&segment_text)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  let kept = filter.apply(morphemes);
  let rows = ResultRow::from_morphemes(&kept);

  info!(row_count = rows.len(), filter = ?filter, "分詞完了");

  Ok(Html(render_page(&text, filter, &rows)))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。セグメンターの初期化状態とは無関係に
/// 常に成功を返す。
pub async fn health_check() -> &'static str {
  "OK"
}

//! wakachi-web サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wakachi_web::ApiError;
use wakachi_web::api::AppState;
use wakachi_web::api::run_server;
use wakachi_web::config::Config;
use wakachi_web::service::LazySegmentService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(preset = ?config.preset, "設定を読み込みました");

  // サービスの作成（辞書は最初の分詞リクエストでロードされる）
  let service = Arc::new(LazySegmentService::new(&config));

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}

//! APIエラー定義

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use wakachi::errors::WakachiError;

/// APIエラー
///
/// フォームの欠落フィールドは黙ってデフォルト値に倒すため、
/// クライアント起因のエラー分類は存在しない。残るのはサーバー側の
/// 失敗（辞書ロード・分かち書きの失敗）のみで、どちらも 500 になる。
#[derive(Debug, Error)]
pub enum ApiError {
  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー（辞書プリセット不正、バインド失敗等）
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Internal(_) => "internal_error",
      Self::Config(_) => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    // フォームアプリのため、エラーボディは素のテキストで返す
    (self.status(), self.to_string()).into_response()
  }
}

/// WakachiError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<WakachiError> for ApiError {
  fn from(err: WakachiError) -> Self {
    match err {
      WakachiError::Dictionary(_) => ApiError::config(format!("dictionary error: {err}")),
      WakachiError::Tokenizer(_) => ApiError::internal(format!("tokenizer error: {err}")),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

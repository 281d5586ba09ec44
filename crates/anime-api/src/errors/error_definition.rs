//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// anime-store クレートのエラー型をインポート
use anime_store::errors::{AnimeError, RepositoryError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// リソースが存在しない
  NotFound,
  /// ストアの制約違反
  ConstraintViolation,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::NotFound => "not_found",
      Self::ConstraintViolation => "constraint_violation",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::ConstraintViolation => StatusCode::BAD_REQUEST,
      Self::NotFound => StatusCode::NOT_FOUND,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error("入力値が無効です: {0}")]
  InvalidInput(String),

  /// 指定 ID の Anime が存在しない
  #[error("Anime が見つかりません: id={0}")]
  NotFound(i64),

  /// ストアの制約違反
  #[error("制約違反: {0}")]
  ConstraintViolation(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::NotFound(_) => ApiErrorKind::NotFound,
      Self::ConstraintViolation(_) => ApiErrorKind::ConstraintViolation,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// NotFound エラーを作成
  #[must_use]
  pub fn not_found(id: i64) -> Self {
    Self::NotFound(id)
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

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "リクエスト処理に失敗しました");
    }

    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// AnimeError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
/// NotFound は読み出し・置換・削除のいずれでも 404 に統一する。
impl From<AnimeError> for ApiError {
  fn from(err: AnimeError) -> Self {
    match err {
      AnimeError::Validation { field, reason } => {
        ApiError::invalid_input(format!("{field}: {reason}"))
      }
      AnimeError::NotFound { id } | AnimeError::Repository(RepositoryError::NotFound { id }) => {
        ApiError::not_found(id)
      }
      AnimeError::Repository(RepositoryError::ConstraintViolation { reason }) => {
        ApiError::ConstraintViolation(reason)
      }
      AnimeError::Config(err) => ApiError::config(err.to_string()),
      AnimeError::Repository(_) => ApiError::internal(format!("storage error: {err}")),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

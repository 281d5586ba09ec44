//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（StoreConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// pagination.default_page_size < 1
  #[error("pagination.default_page_size は 1 以上である必要があります: actual={actual}")]
  InvalidDefaultPageSize {
    /// 実際に指定された値
    actual: u32,
  },

  /// pagination.max_page_size < pagination.default_page_size
  #[error(
    "pagination.max_page_size は pagination.default_page_size 以上である必要があります: \
     default_page_size={default_page_size}, max_page_size={max_page_size}"
  )]
  InvalidMaxPageSize {
    /// pagination.default_page_size
    default_page_size: u32,
    /// pagination.max_page_size
    max_page_size: u32,
  },

  /// database.max_connections < 1
  #[error("database.max_connections は 1 以上である必要があります: actual={actual}")]
  InvalidMaxConnections {
    /// 実際に指定された値
    actual: u32,
  },

  /// データベースファイルのパスがディレクトリを指している
  #[error("database.path がディレクトリを指しています: path={path:?}")]
  DatabasePathIsDirectory {
    /// 不正なパス
    path: PathBuf,
  },

  /// データベースファイルの親ディレクトリ作成に失敗
  #[error("データベースディレクトリの作成に失敗しました: path={path:?}, error={source}")]
  DatabaseDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// OS のデータディレクトリが取得できない（デフォルトパス解決に失敗）
  #[error("データディレクトリが見つかりません。database.path を明示してください")]
  DataDirNotFound,
}

/// リポジトリ（永続化層）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum RepositoryError {
  /// ストアの制約違反（name が空、NOT NULL 違反など）
  #[error("制約違反: {reason}")]
  ConstraintViolation {
    /// 制約違反の内容
    reason: String,
  },

  /// 更新対象の行が存在しない
  #[error("レコードが存在しません: id={id}")]
  NotFound {
    /// 対象 ID
    id: i64,
  },

  /// sqlx によるデータベース操作エラー
  #[error("データベースエラー: {0}")]
  Storage(Arc<sqlx::Error>),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(err: sqlx::Error) -> Self {
    if let sqlx::Error::Database(db_err) = &err {
      use sqlx::error::ErrorKind;
      // 拡張リザルトコードが得られない環境ではメッセージで判定する
      let violated = match db_err.kind() {
        ErrorKind::CheckViolation | ErrorKind::NotNullViolation => true,
        _ => {
          let message = db_err.message();
          message.contains("CHECK constraint failed")
            || message.contains("NOT NULL constraint failed")
        }
      };
      if violated {
        return RepositoryError::ConstraintViolation {
          reason: db_err.message().to_string(),
        };
      }
    }
    RepositoryError::Storage(Arc::new(err))
  }
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `AnimeResult<T>` = `Result<T, AnimeError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnimeError {
  /// 入力値の検証エラー
  #[error("入力値が不正です: {field}: {reason}")]
  Validation {
    /// 対象フィールド名
    field: &'static str,
    /// 不正の理由
    reason: String,
  },

  /// 指定 ID の Anime が存在しない
  #[error("Anime が見つかりません: id={id}")]
  NotFound {
    /// 指定された ID
    id: i64,
  },

  /// リポジトリ関連エラー
  #[error(transparent)]
  Repository(#[from] RepositoryError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl AnimeError {
  /// 検証エラーを作成
  #[must_use]
  pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
    Self::Validation {
      field,
      reason: reason.into(),
    }
  }

  /// NotFound エラーかどうか
  #[must_use]
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound { .. })
  }
}

/// リポジトリ層の Result 型エイリアス
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// anime-store クレートの標準 Result 型エイリアス
pub type AnimeResult<T> = Result<T, AnimeError>;

//! anime-store: Anime カタログの永続化ライブラリー
//!
//! SQLite をバックエンドとしたリポジトリと、その上に載るサービス層を提供する

/// 設定モジュール - StoreConfig, DatabaseLocation 等の設定構造体を定義
pub mod config;

/// データベースモジュール - SQLite 接続プールの生成とスキーマ作成
pub mod database;

/// エラーモジュール - AnimeError, RepositoryError 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - Anime, リクエストボディ, Page 等のデータ構造を定義
pub mod models;

/// リポジトリモジュール - AnimeRepository トレイトと SQLite 実装
pub mod repository;

/// サービスモジュール - AnimeService（NotFound 判定と入力検証を担う上位 API）
pub mod service;

/// 再エクスポート
pub use config::{DatabaseLocation, LogLevel, StoreConfig};
pub use errors::{AnimeError, AnimeResult, RepositoryError};
pub use models::{Anime, AnimePostRequestBody, AnimePutRequestBody, Page, PageRequest, Sort};
pub use repository::{AnimeRepository, SqliteAnimeRepository};
pub use service::AnimeService;

// crates/anime-store/src/service.rs

//! AnimeService: anime-store クレートの統合ファサード。
//!
//! - リポジトリへの委譲
//! - 「存在しない ID」を `AnimeError::NotFound` に変換する唯一の場所
//! - リクエストボディの入力検証
//!
//! HTTP 層などの外部からは、この構造体だけを意識すればよい。

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::database::setup_database;
use crate::errors::{AnimeError, AnimeResult, RepositoryError};
use crate::models::{Anime, AnimePostRequestBody, AnimePutRequestBody, Page, PageRequest};
use crate::repository::{AnimeRepository, SqliteAnimeRepository};

/// anime-store クレートの統合ファサード。
///
/// リポジトリは `Arc<dyn AnimeRepository>` として受け取るため、
/// 本番では SQLite 実装、テストでは任意の実装を注入できる。
#[derive(Clone)]
pub struct AnimeService {
  repository: Arc<dyn AnimeRepository>,
}

impl AnimeService {
  /// 初期化（設定検証 + データベース open + スキーマ作成 + リポジトリ構築）
  ///
  /// # エラー
  /// - 設定が不正（ページサイズ、接続数、DB パス）
  /// - データベースの open / スキーマ作成に失敗
  pub async fn init(config: &StoreConfig) -> AnimeResult<Self> {
    // ConfigError は #[from] で AnimeError に自動変換
    config.validate()?;

    let pool = setup_database(config).await?;
    Ok(Self::with_repository(Arc::new(SqliteAnimeRepository::new(pool))))
  }

  /// 既存のリポジトリからサービスを構築する。
  pub fn with_repository(repository: Arc<dyn AnimeRepository>) -> Self {
    Self { repository }
  }

  /// ページ単位で一覧を取得する。
  pub async fn list_all(&self, request: &PageRequest) -> AnimeResult<Page<Anime>> {
    Ok(self.repository.find_all_paged(request).await?)
  }

  /// 全件を取得する（ページングなし）。
  pub async fn list_all_unpaged(&self) -> AnimeResult<Vec<Anime>> {
    Ok(self.repository.find_all().await?)
  }

  /// 名前の完全一致（大文字小文字を区別）で検索する。
  ///
  /// 該当なしの場合は空の Vec を返す。
  pub async fn find_by_name(&self, name: &str) -> AnimeResult<Vec<Anime>> {
    Ok(self.repository.find_by_name(name).await?)
  }

  /// ID で取得する。存在しなければ `AnimeError::NotFound`。
  ///
  /// ID による読み出しはすべてこのメソッドを経由すること。
  pub async fn find_by_id_or_fail(&self, id: i64) -> AnimeResult<Anime> {
    self.repository.find_by_id(id).await?.ok_or_else(|| {
      debug!(id, "Anime が見つかりません");
      AnimeError::NotFound { id }
    })
  }

  /// 新規作成する。
  ///
  /// # エラー
  /// - name が空白のみ、または長すぎる（`AnimeError::Validation`）
  /// - ストアの制約違反
  pub async fn save(&self, request: AnimePostRequestBody) -> AnimeResult<Anime> {
    request.validate()?;

    let saved = self.repository.save(request.into_anime()).await?;
    info!(id = ?saved.id, name = %saved.name, "Anime を登録しました");
    Ok(saved)
  }

  /// 既存レコードを丸ごと置き換える。
  ///
  /// 存在しない ID は `AnimeError::NotFound`。読み出しと書き込みの間に
  /// 削除された場合も同じく `NotFound` になる。
  pub async fn replace(&self, request: AnimePutRequestBody) -> AnimeResult<()> {
    request.validate()?;

    let saved = self.find_by_id_or_fail(request.id).await?;
    let anime = request.apply_to(saved);

    match self.repository.save(anime).await {
      Ok(updated) => {
        info!(id = ?updated.id, name = %updated.name, "Anime を更新しました");
        Ok(())
      }
      Err(RepositoryError::NotFound { id }) => Err(AnimeError::NotFound { id }),
      Err(e) => Err(e.into()),
    }
  }

  /// 削除する。存在しない ID は `AnimeError::NotFound`。
  pub async fn delete(&self, id: i64) -> AnimeResult<()> {
    let anime = self.find_by_id_or_fail(id).await?;
    self.repository.delete(&anime).await?;
    info!(id, "Anime を削除しました");
    Ok(())
  }
}

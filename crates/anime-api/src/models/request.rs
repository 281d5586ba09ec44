//! リクエストモデル定義
//!
//! リクエストボディ（`AnimePostRequestBody` / `AnimePutRequestBody`）は
//! サービス層と共有するため anime-store 側で定義している。

use serde::Deserialize;

use anime_store::PageRequest;
use anime_store::config::PaginationConfig;

use crate::errors::Result;

/// `GET /animes` のクエリパラメーター
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
  /// ページ番号（0 始まり）
  pub page: Option<u32>,
  /// 1 ページあたりの件数
  pub size: Option<u32>,
  /// 並び順（例: `name,desc`）
  pub sort: Option<String>,
}

impl PageQuery {
  /// 設定の上限値を適用して `PageRequest` に変換する
  ///
  /// # Errors
  /// `size=0` や不正な `sort` の場合に入力エラーを返す
  pub fn into_page_request(self, limits: &PaginationConfig) -> Result<PageRequest> {
    Ok(PageRequest::resolve(self.page, self.size, self.sort.as_deref(), limits)?)
  }
}

/// `GET /animes/find` のクエリパラメーター
#[derive(Debug, Deserialize)]
pub struct NameQuery {
  /// 検索する名前（完全一致）
  pub name: String,
}

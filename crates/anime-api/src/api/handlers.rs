//! HTTPハンドラー定義
//!
//! 各ハンドラーは抽出 → サービス呼び出し → レスポンス組み立てのみを行う。
//! 抽出エラー（不正な JSON・パス・クエリ）はすべて 400 の JSON エラーに揃える。

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  http::StatusCode,
};
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::{
  AnimePostRequestBody, AnimePutRequestBody, AnimeResponse, NameQuery, PageQuery, PageResponse,
};

use super::state::AppState;

/// GET /animes エンドポイント
///
/// ページ単位で一覧を返す。
///
/// # Query
/// - `page`: ページ番号（0 始まり、省略時 0）
/// - `size`: 件数（省略時は設定値、上限を超える値は丸める）
/// - `sort`: `id` または `name`、任意で `,asc` / `,desc`
///
/// # Response
/// - 200 OK: ページ
/// - 400 Bad Request: 不正なクエリ
pub async fn list(
  State(state): State<AppState>,
  query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageResponse<AnimeResponse>>, ApiError> {
  let Query(query) = query.map_err(|e| ApiError::invalid_input(e.body_text()))?;
  let request = query.into_page_request(&state.config.pagination())?;
  debug!(page = request.page(), size = request.size(), "一覧リクエストを受信");

  let page = state.service.list(request).await?;
  Ok(Json(PageResponse::from(page.map(AnimeResponse::from))))
}

/// GET /animes/all エンドポイント
///
/// ページングなしで全件を返す。
pub async fn list_all(
  State(state): State<AppState>,
) -> Result<Json<Vec<AnimeResponse>>, ApiError> {
  let animes = state.service.list_all().await?;
  debug!(count = animes.len(), "全件取得完了");

  Ok(Json(animes.into_iter().map(AnimeResponse::from).collect()))
}

/// GET /animes/{id} エンドポイント
///
/// # Response
/// - 200 OK: 該当レコード
/// - 400 Bad Request: id が整数でない
/// - 404 Not Found: 該当なし
pub async fn find_by_id(
  State(state): State<AppState>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AnimeResponse>, ApiError> {
  let Path(id) = id.map_err(|e| ApiError::invalid_input(e.body_text()))?;

  let anime = state.service.find_by_id(id).await?;
  Ok(Json(anime.into()))
}

/// GET /animes/find?name= エンドポイント
///
/// 名前の完全一致（大文字小文字を区別）で検索する。該当なしは空配列。
pub async fn find_by_name(
  State(state): State<AppState>,
  query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Vec<AnimeResponse>>, ApiError> {
  let Query(NameQuery { name }) = query.map_err(|e| ApiError::invalid_input(e.body_text()))?;

  let animes = state.service.find_by_name(&name).await?;
  debug!(name = %name, count = animes.len(), "名前検索完了");

  Ok(Json(animes.into_iter().map(AnimeResponse::from).collect()))
}

/// POST /animes エンドポイント
///
/// # Request Body
/// ```json
/// { "name": "DBZ" }
/// ```
///
/// # Response
/// - 201 Created: 作成されたレコード（id 付き）
/// - 400 Bad Request: name が未指定・空白・長すぎる、JSON が不正
pub async fn save(
  State(state): State<AppState>,
  body: Result<Json<AnimePostRequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<AnimeResponse>), ApiError> {
  let Json(body) = body.map_err(|e| ApiError::invalid_input(e.body_text()))?;

  let anime = state.service.save(body).await?;
  info!(id = ?anime.id, "Anime 作成リクエスト完了");

  Ok((StatusCode::CREATED, Json(anime.into())))
}

/// PUT /animes エンドポイント
///
/// # Request Body
/// ```json
/// { "id": 1, "name": "Naruto" }
/// ```
///
/// # Response
/// - 204 No Content: 置換成功
/// - 400 Bad Request: id 欠落・name 不正・JSON 不正
/// - 404 Not Found: 該当なし
pub async fn replace(
  State(state): State<AppState>,
  body: Result<Json<AnimePutRequestBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
  let Json(body) = body.map_err(|e| ApiError::invalid_input(e.body_text()))?;
  let id = body.id;

  state.service.replace(body).await?;
  info!(id, "Anime 置換リクエスト完了");

  Ok(StatusCode::NO_CONTENT)
}

/// DELETE /animes/{id} エンドポイント
///
/// # Response
/// - 204 No Content: 削除成功
/// - 400 Bad Request: id が整数でない
/// - 404 Not Found: 該当なし（削除済みを含む）
pub async fn delete(
  State(state): State<AppState>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
  let Path(id) = id.map_err(|e| ApiError::invalid_input(e.body_text()))?;

  state.service.delete(id).await?;
  info!(id, "Anime 削除リクエスト完了");

  Ok(StatusCode::NO_CONTENT)
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}

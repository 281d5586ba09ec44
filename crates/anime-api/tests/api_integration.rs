//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! 前半はスタブサービス、後半はインメモリ SQLite 上の実サービスを使用する。

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use anime_api::{
  api::{AppState, create_router},
  config::Config,
  errors::{ApiError, Result as ApiResult},
  service::{AnimeApiService, AnimeApiServiceFull},
};
use anime_store::database::setup_test_database;
use anime_store::{
  Anime, AnimePostRequestBody, AnimePutRequestBody, AnimeService, DatabaseLocation, LogLevel, Page,
  PageRequest, SqliteAnimeRepository,
};

/// id=1, name="DBZ"
fn valid_anime() -> Anime {
  Anime::with_id(1, "DBZ")
}

/// 統合テスト用の軽量スタブサービス
///
/// - id=1 のみ存在する
/// - `empty_search` が true の場合、名前検索は常に空
/// - 空白の name は `invalid_input` エラー
struct StubAnimeApiService {
  empty_search: bool,
}

#[async_trait]
impl AnimeApiService for StubAnimeApiService {
  async fn list(&self, request: PageRequest) -> ApiResult<Page<Anime>> {
    Ok(Page::new(vec![valid_anime()], &request, 1))
  }

  async fn list_all(&self) -> ApiResult<Vec<Anime>> {
    Ok(vec![valid_anime()])
  }

  async fn find_by_id(&self, id: i64) -> ApiResult<Anime> {
    if id == 1 { Ok(valid_anime()) } else { Err(ApiError::not_found(id)) }
  }

  async fn find_by_name(&self, _name: &str) -> ApiResult<Vec<Anime>> {
    if self.empty_search { Ok(Vec::new()) } else { Ok(vec![valid_anime()]) }
  }

  async fn save(&self, body: AnimePostRequestBody) -> ApiResult<Anime> {
    body.validate()?;
    Ok(valid_anime())
  }

  async fn replace(&self, body: AnimePutRequestBody) -> ApiResult<()> {
    body.validate()?;
    if body.id == 1 { Ok(()) } else { Err(ApiError::not_found(body.id)) }
  }

  async fn delete(&self, id: i64) -> ApiResult<()> {
    if id == 1 { Ok(()) } else { Err(ApiError::not_found(id)) }
  }
}

fn test_config() -> Config {
  Config {
    bind_addr: "127.0.0.1:0".to_string(),
    database: DatabaseLocation::InMemory,
    db_max_connections: 1,
    default_page_size: 20,
    max_page_size: 100,
    log_level: LogLevel::Info,
  }
}

/// スタブを注入した Router を構築する
fn stub_app(empty_search: bool) -> Router {
  let service: Arc<dyn AnimeApiService> = Arc::new(StubAnimeApiService { empty_search });
  create_router(AppState::new(test_config(), service))
}

/// インメモリ SQLite 上の実サービスを使う Router を構築する
async fn store_app() -> Router {
  let pool = setup_test_database().await.expect("in-memory database");
  let store = AnimeService::with_repository(Arc::new(SqliteAnimeRepository::new(pool)));
  let service: Arc<dyn AnimeApiService> = Arc::new(AnimeApiServiceFull::from_service(store));
  create_router(AppState::new(test_config(), service))
}

/// リクエストを送信し、ステータスとボディを返す
async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<String>,
) -> (StatusCode, axum::body::Bytes) {
  let builder = Request::builder().method(method).uri(uri);
  let request = match body {
    Some(body) => builder.header("content-type", "application/json").body(Body::from(body)),
    None => builder.body(Body::empty()),
  }
  .unwrap();

  let response = app.clone().oneshot(request).await.expect("request should succeed");
  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  (status, bytes)
}

fn json(bytes: &[u8]) -> serde_json::Value {
  serde_json::from_slice(bytes).expect("body should be valid json")
}

// ============================================================================
// スタブサービス: 正常系
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let (status, body) = send(&stub_app(false), "GET", "/health", None).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_ref(), b"OK");
}

#[tokio::test]
async fn list_returns_anime_inside_page() {
  let (status, body) = send(&stub_app(false), "GET", "/animes", None).await;

  assert_eq!(status, StatusCode::OK);
  let page = json(&body);
  assert_eq!(page["number_of_elements"], 1);
  assert_eq!(page["content"][0]["name"], "DBZ");
  assert_eq!(page["empty"], false);
}

#[tokio::test]
async fn list_all_returns_animes() {
  let (status, body) = send(&stub_app(false), "GET", "/animes/all", None).await;

  assert_eq!(status, StatusCode::OK);
  let animes = json(&body);
  assert_eq!(animes.as_array().unwrap().len(), 1);
  assert_eq!(animes[0]["name"], "DBZ");
}

#[tokio::test]
async fn find_by_id_returns_anime() {
  let (status, body) = send(&stub_app(false), "GET", "/animes/1", None).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json(&body)["id"], 1);
}

#[tokio::test]
async fn find_by_name_returns_animes() {
  let (status, body) = send(&stub_app(false), "GET", "/animes/find?name=anime", None).await;

  assert_eq!(status, StatusCode::OK);
  let animes = json(&body);
  assert_eq!(animes.as_array().unwrap().len(), 1);
  assert_eq!(animes[0]["name"], "DBZ");
}

#[tokio::test]
async fn find_by_name_returns_empty_list_when_not_found() {
  let (status, body) = send(&stub_app(true), "GET", "/animes/find?name=anime", None).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn save_returns_created_anime() {
  let payload = serde_json::json!({ "name": "DBZ" });
  let (status, body) = send(&stub_app(false), "POST", "/animes", Some(payload.to_string())).await;

  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(json(&body), serde_json::json!({ "id": 1, "name": "DBZ" }));
}

#[tokio::test]
async fn replace_returns_no_content() {
  let payload = serde_json::json!({ "id": 1, "name": "Naruto" });
  let (status, body) = send(&stub_app(false), "PUT", "/animes", Some(payload.to_string())).await;

  assert_eq!(status, StatusCode::NO_CONTENT);
  assert!(body.is_empty());
}

#[tokio::test]
async fn delete_returns_no_content() {
  let (status, body) = send(&stub_app(false), "DELETE", "/animes/1", None).await;

  assert_eq!(status, StatusCode::NO_CONTENT);
  assert!(body.is_empty());
}

// ============================================================================
// スタブサービス: 異常系
// ============================================================================

#[tokio::test]
async fn find_by_id_missing_returns_404() {
  let (status, body) = send(&stub_app(false), "GET", "/animes/2", None).await;

  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(json(&body)["error"]["code"], "not_found");
}

#[tokio::test]
async fn find_by_id_non_numeric_returns_400() {
  let (status, body) = send(&stub_app(false), "GET", "/animes/abc", None).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn find_by_name_without_name_returns_400() {
  let (status, body) = send(&stub_app(false), "GET", "/animes/find", None).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn list_with_invalid_sort_returns_400() {
  let (status, _) = send(&stub_app(false), "GET", "/animes?sort=rating", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_with_zero_size_returns_400() {
  let (status, _) = send(&stub_app(false), "GET", "/animes?size=0", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn save_blank_name_returns_400() {
  let payload = serde_json::json!({ "name": "   " });
  let (status, body) = send(&stub_app(false), "POST", "/animes", Some(payload.to_string())).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn save_missing_name_returns_400() {
  let payload = serde_json::json!({ "title": "DBZ" });
  let (status, body) = send(&stub_app(false), "POST", "/animes", Some(payload.to_string())).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn save_invalid_json_returns_400() {
  let (status, body) =
    send(&stub_app(false), "POST", "/animes", Some("{ invalid json".to_string())).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(json(&body)["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn replace_missing_id_field_returns_400() {
  let payload = serde_json::json!({ "name": "Naruto" });
  let (status, _) = send(&stub_app(false), "PUT", "/animes", Some(payload.to_string())).await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn replace_unknown_id_returns_404() {
  let payload = serde_json::json!({ "id": 2, "name": "Naruto" });
  let (status, _) = send(&stub_app(false), "PUT", "/animes", Some(payload.to_string())).await;

  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_returns_404() {
  let (status, _) = send(&stub_app(false), "DELETE", "/animes/2", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// 実サービス（インメモリ SQLite）
// ============================================================================

#[tokio::test]
async fn store_create_then_find() {
  let app = store_app().await;

  let payload = serde_json::json!({ "name": "DBZ" });
  let (status, body) = send(&app, "POST", "/animes", Some(payload.to_string())).await;
  assert_eq!(status, StatusCode::CREATED);
  let created = json(&body);
  let id = created["id"].as_i64().expect("generated id");
  assert_eq!(created["name"], "DBZ");

  let (status, body) = send(&app, "GET", &format!("/animes/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json(&body)["name"], "DBZ");

  let (_, body) = send(&app, "GET", "/animes/find?name=DBZ", None).await;
  assert_eq!(json(&body).as_array().unwrap().len(), 1);

  let (_, body) = send(&app, "GET", "/animes/find?name=dbz", None).await;
  assert_eq!(json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn store_paged_listing_with_single_record() {
  let app = store_app().await;
  let payload = serde_json::json!({ "name": "DBZ" });
  send(&app, "POST", "/animes", Some(payload.to_string())).await;

  let (status, body) = send(&app, "GET", "/animes", None).await;

  assert_eq!(status, StatusCode::OK);
  let page = json(&body);
  assert_eq!(page["number_of_elements"], 1);
  assert_eq!(page["total_elements"], 1);
  assert_eq!(page["size"], 20);
  assert_eq!(page["content"][0]["name"], "DBZ");
}

#[tokio::test]
async fn store_paged_listing_slices_and_sorts() {
  let app = store_app().await;
  for name in ["Naruto", "Bleach", "DBZ"] {
    let payload = serde_json::json!({ "name": name });
    send(&app, "POST", "/animes", Some(payload.to_string())).await;
  }

  let (status, body) = send(&app, "GET", "/animes?page=1&size=2&sort=name,asc", None).await;

  assert_eq!(status, StatusCode::OK);
  let page = json(&body);
  assert_eq!(page["content"][0]["name"], "Naruto");
  assert_eq!(page["number"], 1);
  assert_eq!(page["total_pages"], 2);
  assert_eq!(page["last"], true);
}

#[tokio::test]
async fn store_replace_changes_name() {
  let app = store_app().await;
  let (_, body) =
    send(&app, "POST", "/animes", Some(serde_json::json!({ "name": "DBZ" }).to_string())).await;
  let id = json(&body)["id"].as_i64().unwrap();

  let payload = serde_json::json!({ "id": id, "name": "Naruto" });
  let (status, _) = send(&app, "PUT", "/animes", Some(payload.to_string())).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (_, body) = send(&app, "GET", &format!("/animes/{id}"), None).await;
  assert_eq!(json(&body)["name"], "Naruto");
}

#[tokio::test]
async fn store_blank_name_persists_nothing() {
  let app = store_app().await;

  let payload = serde_json::json!({ "name": "" });
  let (status, _) = send(&app, "POST", "/animes", Some(payload.to_string())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, body) = send(&app, "GET", "/animes/all", None).await;
  assert_eq!(json(&body), serde_json::json!([]));
}

#[tokio::test]
async fn store_delete_then_lookup_and_delete_again() {
  let app = store_app().await;
  let (_, body) =
    send(&app, "POST", "/animes", Some(serde_json::json!({ "name": "DBZ" }).to_string())).await;
  let id = json(&body)["id"].as_i64().unwrap();

  let (status, _) = send(&app, "DELETE", &format!("/animes/{id}"), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, _) = send(&app, "GET", &format!("/animes/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  // 削除済み ID の再削除は常に 404
  let (status, _) = send(&app, "DELETE", &format!("/animes/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_replace_missing_id_returns_404() {
  let app = store_app().await;

  let payload = serde_json::json!({ "id": 99, "name": "Naruto" });
  let (status, body) = send(&app, "PUT", "/animes", Some(payload.to_string())).await;

  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(json(&body)["error"]["code"], "not_found");
}

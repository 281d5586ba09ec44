//! ルーター定義

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::{delete, find_by_id, find_by_name, health_check, list, list_all, replace, save};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// `/animes/all` と `/animes/find` は静的パスのため `/animes/{id}` より優先される。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/animes", get(list).post(save).put(replace))
    .route("/animes/all", get(list_all))
    .route("/animes/find", get(find_by_name))
    .route("/animes/{id}", get(find_by_id).delete(delete))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}

//! anime-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use anime_api::ApiError;
use anime_api::api::AppState;
use anime_api::api::run_server;
use anime_api::config::Config;
use anime_api::service::AnimeApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルを決めるため、ロギング初期化より先に行う）
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG があればそちらを優先）
  let store_config = config.store_config();
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(store_config.log_level().as_str()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(database = %config.database, "設定を読み込みました");

  // サービスの初期化
  let service = Arc::new(AnimeApiServiceFull::new(&config).await?);
  tracing::info!("Anime サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}

pub mod auth;
pub mod config;
pub mod handler;
pub mod transcode;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{middleware, Router};

use convert_core::{FetchClient, StorageClient, MAX_BODY_SIZE};

use crate::config::AppConfig;

/// アプリケーション共有状態
///
/// クライアントと設定は起動時に一度だけ作られ、全リクエストで共有される
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub fetcher: FetchClient,
    pub storage: StorageClient,
}

impl AppState {
    /// 設定からアプリケーション状態を組み立てる
    pub fn new(config: AppConfig, storage: StorageClient) -> Self {
        Self {
            config: Arc::new(config),
            fetcher: FetchClient::new(),
            storage,
        }
    }
}

/// ルータを構築する
///
/// `/convert` のみ API キーゲートの内側、`/health` は外側
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/convert", post(handler::convert))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .route("/health", get(handler::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state)
}

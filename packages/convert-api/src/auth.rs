use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::AppState;

/// `x-api-key` ヘッダを検査する認証ゲート
///
/// 設定されたシークレットとの完全一致のみ許可する。
/// キー欠落と不一致は区別せず、どちらも同じ 403 を返す
pub async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let supplied = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());

    let authorized = match (&state.config.auth_key, supplied) {
        (Some(expected), Some(key)) => key == expected,
        // AUTH_KEY 未設定時は全リクエストを拒否する
        _ => false,
    };

    if authorized {
        next.run(request).await
    } else {
        tracing::warn!("request rejected: invalid or missing API key");
        (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({ "error": "Forbidden: invalid or missing API key" })),
        )
            .into_response()
    }
}

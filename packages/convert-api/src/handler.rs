use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use convert_core::{
    ConversionRequest, ConvertError, FetchError, StorageError, TransformError,
};

use crate::transcode::transcode;
use crate::AppState;

/// `/convert` のリクエストボディ
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertBody {
    pub image_url: Option<String>,
    pub format: Option<String>,
    pub quality: Option<u8>,
    pub target_width: Option<u32>,
    pub bucket_name: Option<String>,
    pub file_prefix: Option<String>,
    pub file_name: Option<String>,
}

/// 変換成功時のレスポンス
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub original: String,
    pub converted: String,
    pub width: u32,
    pub format: String,
    pub bucket: String,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// 変換パイプライン: 検証 → 取得 → 変換 → アップロード → 応答
pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertBody>, JsonRejection>,
) -> Result<Json<ConvertResponse>, AppError> {
    // 数値フィールドの型不一致などデシリアライズ失敗も 400 の JSON で返す
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "malformed request body");
        AppError::BadRequest(rejection.body_text())
    })?;

    let request = ConversionRequest::resolve(
        body.image_url,
        body.format,
        body.quality,
        body.target_width,
        body.bucket_name,
        body.file_prefix,
        body.file_name,
        &state.config.default_bucket,
    )?;

    tracing::info!(url = %request.image_url, "fetching source image");
    let input = state.fetcher.fetch(&request.image_url).await?;

    tracing::info!(
        w = request.target_width,
        f = request.format.extension(),
        q = request.quality,
        "transcoding image"
    );
    let output = transcode(&input, request.target_width, request.format, request.quality)?;

    let key = request.object_key();
    tracing::info!(bucket = %request.bucket_name, key = %key, "uploading object");
    state
        .storage
        .upload_object(
            &request.bucket_name,
            &key,
            output,
            request.format.content_type(),
        )
        .await?;

    let converted = state.storage.public_url(&request.bucket_name, &key);

    Ok(Json(ConvertResponse {
        original: request.image_url,
        converted,
        width: request.target_width,
        format: request.format.extension().to_string(),
        bucket: request.bucket_name,
    }))
}

/// HTTP 境界のエラー型
///
/// 取得・変換・アップロードの失敗は区別せず、すべて
/// `{"error":"Conversion failed","details":...}` の 500 として返す
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ConversionFailed(String),
}

impl From<ConvertError> for AppError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Validation(msg) => {
                tracing::warn!(error = %msg, "validation error");
                AppError::BadRequest(msg)
            }
            ConvertError::Fetch(fetch_err) => fetch_err.into(),
            ConvertError::Transform(transform_err) => transform_err.into(),
            ConvertError::Storage(storage_err) => storage_err.into(),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        tracing::error!(error = %err, "source image fetch failed");
        AppError::ConversionFailed(err.to_string())
    }
}

impl From<TransformError> for AppError {
    fn from(err: TransformError) -> Self {
        tracing::error!(error = %err, "image transcode failed");
        AppError::ConversionFailed(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "object upload failed");
        AppError::ConversionFailed(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            AppError::ConversionFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Conversion failed",
                    "details": details,
                })),
            )
                .into_response(),
        }
    }
}

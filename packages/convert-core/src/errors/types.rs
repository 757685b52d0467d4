use thiserror::Error;

/// 変換パイプラインの統合エラー型
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// 元画像取得エラー
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch source image: {0}")]
    Status(String),

    #[error("failed to fetch source image: {0}")]
    Network(String),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}

/// ストレージ書き込みエラー
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage access denied")]
    Forbidden,

    #[error("storage rejected upload: {status}")]
    Rejected { status: String },

    #[error("storage error: {0}")]
    Internal(String),
}

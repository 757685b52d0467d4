use crate::constants::DEFAULT_STORAGE_ENDPOINT;
use crate::errors::StorageError;
use bytes::Bytes;

/// Google Cloud Storage クライアント
///
/// JSON API の単発メディアアップロードでオブジェクトを書き込む。
/// 再開可能アップロードは使わない。既存オブジェクトは上書きされる
#[derive(Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl StorageClient {
    /// 新しい StorageClient を作成する
    pub fn new(endpoint: String, access_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// 環境変数から StorageClient を作成する
    ///
    /// - `STORAGE_ENDPOINT`（省略時は `https://storage.googleapis.com`）
    /// - `STORAGE_ACCESS_TOKEN`（省略可。実行環境の資格情報を使う場合）
    pub fn from_env() -> Self {
        let endpoint = std::env::var("STORAGE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_STORAGE_ENDPOINT.to_string());
        let access_token = std::env::var("STORAGE_ACCESS_TOKEN").ok();

        Self::new(endpoint, access_token)
    }

    /// オブジェクトを単発アップロードで書き込む
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let url = format!("{}/upload/storage/v1/b/{}/o", self.endpoint, bucket);

        let mut request = self
            .client
            .post(&url)
            .query(&[("uploadType", "media"), ("name", key)])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data);

        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            reqwest::StatusCode::FORBIDDEN => {
                tracing::error!(bucket = %bucket, key = %key, "access denied by storage");
                Err(StorageError::Forbidden)
            }
            status => {
                tracing::error!(bucket = %bucket, key = %key, status = %status, "storage rejected upload");
                Err(StorageError::Rejected {
                    status: status.to_string(),
                })
            }
        }
    }

    /// 保存先オブジェクトの公開 URL を導出する
    ///
    /// 署名も有効期限もないパス形式の URL
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, bucket, key)
    }
}

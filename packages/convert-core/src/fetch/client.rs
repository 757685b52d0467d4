use crate::errors::FetchError;
use bytes::Bytes;

/// 元画像フェッチクライアント
///
/// リクエストをまたいで共有される reqwest クライアントを保持する。
/// リダイレクトは reqwest のデフォルトに従い、リトライ・タイムアウトは行わない
#[derive(Clone, Default)]
pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    /// 新しい FetchClient を作成する
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// URL を GET して本文全体をメモリに読み込む
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            tracing::error!(url = %url, status = %status, "source image fetch failed");
            return Err(FetchError::Status(status_text));
        }

        response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

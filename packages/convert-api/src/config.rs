use std::env;

/// プロセス設定
///
/// 起動時に一度だけ環境変数から読み込む。リクエストごとの再読込はしない
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `x-api-key` と照合する共有シークレット。未設定なら全リクエストが 403 になる
    pub auth_key: Option<String>,
    pub port: u16,
    /// `bucketName` 省略時のバケット
    pub default_bucket: String,
}

impl AppConfig {
    /// 環境変数から AppConfig を作成する
    ///
    /// - `AUTH_KEY`（省略可。未設定は起動時に警告）
    /// - `PORT`（省略時は 8080）
    /// - `DEFAULT_BUCKET`（省略時は `converted-images`）
    pub fn from_env() -> Self {
        let auth_key = env::var("AUTH_KEY").ok().filter(|k| !k.is_empty());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let default_bucket =
            env::var("DEFAULT_BUCKET").unwrap_or_else(|_| "converted-images".to_string());

        Self {
            auth_key,
            port,
            default_bucket,
        }
    }
}

/// デフォルトの出力品質（0-100）
pub const DEFAULT_QUALITY: u8 = 70;

/// デフォルトの出力幅（px）
pub const DEFAULT_TARGET_WIDTH: u32 = 1500;

/// リクエストボディの上限（10MB）
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// 公開 URL のベース（Google Cloud Storage のパス形式）
pub const DEFAULT_STORAGE_ENDPOINT: &str = "https://storage.googleapis.com";

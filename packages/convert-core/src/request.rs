use crate::constants::{DEFAULT_QUALITY, DEFAULT_TARGET_WIDTH};
use crate::errors::ConvertError;
use crate::naming;
use crate::transform::OutputFormat;

/// 検証済みの変換リクエスト
///
/// ハンドラのワイヤ型から `ConversionRequest::resolve` で作る。
/// リクエストのライフタイムを超えて保持されることはない
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub image_url: String,
    pub format: OutputFormat,
    pub quality: u8,
    pub target_width: u32,
    pub bucket_name: String,
    pub file_prefix: String,
    pub file_name: String,
}

impl ConversionRequest {
    /// 生の入力値を検証し、デフォルトを適用してリクエストを確定する
    ///
    /// - `image_url` は必須かつ構文的に正しい URL
    /// - `format` は avif / jpg / jpeg / png のいずれか（大文字小文字不問）
    /// - `target_width` は正の整数
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        image_url: Option<String>,
        format: Option<String>,
        quality: Option<u8>,
        target_width: Option<u32>,
        bucket_name: Option<String>,
        file_prefix: Option<String>,
        file_name: Option<String>,
        default_bucket: &str,
    ) -> Result<Self, ConvertError> {
        let image_url = match image_url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(ConvertError::Validation("imageUrl is required".to_string())),
        };

        url::Url::parse(&image_url).map_err(|_| {
            ConvertError::Validation(format!("imageUrl is not a valid URL: {image_url}"))
        })?;

        let format = match format {
            Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
                ConvertError::Validation(format!(
                    "Invalid format: {raw}. Use avif, jpg, or png."
                ))
            })?,
            None => OutputFormat::Avif,
        };

        let target_width = target_width.unwrap_or(DEFAULT_TARGET_WIDTH);
        if target_width == 0 {
            return Err(ConvertError::Validation(
                "targetWidth must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            image_url,
            format,
            quality: quality.unwrap_or(DEFAULT_QUALITY),
            target_width,
            bucket_name: bucket_name
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| default_bucket.to_string()),
            file_prefix: file_prefix.unwrap_or_default(),
            file_name: file_name.unwrap_or_default(),
        })
    }

    /// 出力オブジェクトのキー
    ///
    /// `file_name` が空のときは `image_url` から導出する
    pub fn object_key(&self) -> String {
        let base_name = if self.file_name.is_empty() {
            naming::derive_base_name(&self.image_url)
        } else {
            self.file_name.clone()
        };
        naming::object_key(&base_name, &self.file_prefix, self.target_width, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_minimal(image_url: Option<&str>) -> Result<ConversionRequest, ConvertError> {
        ConversionRequest::resolve(
            image_url.map(String::from),
            None,
            None,
            None,
            None,
            None,
            None,
            "default-bucket",
        )
    }

    #[test]
    fn test_missing_image_url() {
        let err = resolve_minimal(None).unwrap_err();
        assert!(err.to_string().contains("imageUrl is required"));

        let err = resolve_minimal(Some("")).unwrap_err();
        assert!(err.to_string().contains("imageUrl is required"));
    }

    #[test]
    fn test_invalid_image_url() {
        let err = resolve_minimal(Some("not a url")).unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn test_defaults() {
        let req = resolve_minimal(Some("https://x/a.png")).unwrap();
        assert_eq!(req.format, OutputFormat::Avif);
        assert_eq!(req.quality, 70);
        assert_eq!(req.target_width, 1500);
        assert_eq!(req.bucket_name, "default-bucket");
        assert_eq!(req.file_prefix, "");
        assert_eq!(req.file_name, "");
        assert_eq!(req.object_key(), "a_1500.avif");
    }

    #[test]
    fn test_invalid_format_names_value() {
        let err = ConversionRequest::resolve(
            Some("https://x/a.png".to_string()),
            Some("webp".to_string()),
            None,
            None,
            None,
            None,
            None,
            "default-bucket",
        )
        .unwrap_err();
        assert!(err.to_string().contains("webp"));
    }

    #[test]
    fn test_format_case_insensitive() {
        let req = ConversionRequest::resolve(
            Some("https://x/a.png".to_string()),
            Some("JPEG".to_string()),
            None,
            None,
            None,
            None,
            None,
            "default-bucket",
        )
        .unwrap();
        assert_eq!(req.format, OutputFormat::Jpeg);
    }

    #[test]
    fn test_zero_target_width_rejected() {
        let err = ConversionRequest::resolve(
            Some("https://x/a.png".to_string()),
            None,
            None,
            Some(0),
            None,
            None,
            None,
            "default-bucket",
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Validation(_)));
    }

    #[test]
    fn test_explicit_file_name_and_prefix() {
        let req = ConversionRequest::resolve(
            Some("https://x/b.jpg".to_string()),
            Some("png".to_string()),
            None,
            Some(300),
            Some("photos".to_string()),
            Some("albums/".to_string()),
            Some("custom".to_string()),
            "default-bucket",
        )
        .unwrap();
        assert_eq!(req.bucket_name, "photos");
        assert_eq!(req.object_key(), "albums/custom_300.png");
    }
}

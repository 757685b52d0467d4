/// 出力フォーマット
///
/// `jpg` と `jpeg` は同じエンコーダを使うが、オブジェクトキーの
/// 拡張子にはリクエストされた綴りがそのまま入るため別変種として持つ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Avif,
    Jpg,
    Jpeg,
    Png,
}

impl OutputFormat {
    /// 文字列から OutputFormat を作成（大文字小文字は区別しない）
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "avif" => Some(Self::Avif),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// オブジェクトキーの拡張子・レスポンスで返す綴り
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    /// Content-Type を取得
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Avif => "image/avif",
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(OutputFormat::parse("avif"), Some(OutputFormat::Avif));
        assert_eq!(OutputFormat::parse("AVIF"), Some(OutputFormat::Avif));
        assert_eq!(OutputFormat::parse("Jpg"), Some(OutputFormat::Jpg));
        assert_eq!(OutputFormat::parse("jpeg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::parse("png"), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::parse("webp"), None);
        assert_eq!(OutputFormat::parse("gif"), None);
    }

    #[test]
    fn test_extension_keeps_spelling() {
        assert_eq!(OutputFormat::Jpg.extension(), "jpg");
        assert_eq!(OutputFormat::Jpeg.extension(), "jpeg");
        assert_eq!(OutputFormat::parse("JPEG").unwrap().extension(), "jpeg");
    }

    #[test]
    fn test_content_type() {
        assert_eq!(OutputFormat::Avif.content_type(), "image/avif");
        assert_eq!(OutputFormat::Jpg.content_type(), "image/jpeg");
        assert_eq!(OutputFormat::Jpeg.content_type(), "image/jpeg");
        assert_eq!(OutputFormat::Png.content_type(), "image/png");
    }
}

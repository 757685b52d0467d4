use crate::errors::TransformError;
use crate::transform::params::OutputFormat;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// AVIF エンコード速度（1=最高品質・最遅、10=最速）
const AVIF_SPEED: u8 = 4;

/// 画像をエンコードする
pub fn encode_image(
    img: &DynamicImage,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, TransformError> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        OutputFormat::Jpg | OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            img.to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| TransformError::ProcessingFailed(format!("JPEG encode failed: {e}")))?;
        }
        OutputFormat::Png => {
            // image クレートの PNG エンコーダに品質パラメータはない（quality は無視）
            img.write_to(&mut buf, ImageFormat::Png)
                .map_err(|e| TransformError::ProcessingFailed(format!("PNG encode failed: {e}")))?;
        }
        OutputFormat::Avif => {
            let encoder = AvifEncoder::new_with_speed_quality(&mut buf, AVIF_SPEED, quality);
            img.write_with_encoder(encoder)
                .map_err(|e| TransformError::ProcessingFailed(format!("AVIF encode failed: {e}")))?;
        }
    }

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, OutputFormat::Jpg, 80).unwrap();

        assert!(!data.is_empty());
        // JPEG マジックナンバー確認
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);

        // jpg / jpeg は同じエンコーダ
        let data2 = encode_image(&img, OutputFormat::Jpeg, 80).unwrap();
        assert_eq!(&data2[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_png() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, OutputFormat::Png, 80).unwrap();

        assert!(!data.is_empty());
        // PNG マジックナンバー確認
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_quality_is_ignored() {
        // PNG に品質の概念はなく、quality 値は出力に影響しない
        let img = DynamicImage::new_rgb8(10, 10);
        let low = encode_image(&img, OutputFormat::Png, 10).unwrap();
        let high = encode_image(&img, OutputFormat::Png, 90).unwrap();
        assert_eq!(low, high);
    }

    #[test]
    fn test_encode_avif() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, OutputFormat::Avif, 80).unwrap();

        assert!(!data.is_empty());
        // AVIF は ISO BMFF コンテナ（ftyp ボックス）
        assert_eq!(&data[4..8], b"ftyp");
    }

    #[test]
    fn test_jpeg_quality_affects_output() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_fn(64, 64, |x, y| {
            image::Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8])
        }));
        let low = encode_image(&img, OutputFormat::Jpg, 10).unwrap();
        let high = encode_image(&img, OutputFormat::Jpg, 95).unwrap();
        assert!(low.len() < high.len());
    }
}

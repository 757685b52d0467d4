use crate::errors::TransformError;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeOptions, Resizer};
use image::DynamicImage;

/// 画像をリサイズする
///
/// fast_image_resize の Lanczos3 フィルタを使用
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    // RGB8 に変換
    let rgb_img = img.to_rgb8();
    let width = rgb_img.width();
    let height = rgb_img.height();

    let src_image = Image::from_vec_u8(width, height, rgb_img.into_raw(), PixelType::U8x3)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x3);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(fast_image_resize::ResizeAlg::Convolution(
                FilterType::Lanczos3,
            )),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    let resized_rgb = image::RgbImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| {
            TransformError::ProcessingFailed("failed to convert resized image".to_string())
        })?;

    Ok(DynamicImage::ImageRgb8(resized_rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_down() {
        let img = DynamicImage::new_rgb8(1000, 500);
        let resized = resize_image(&img, 400, 200).unwrap();
        assert_eq!(resized.width(), 400);
        assert_eq!(resized.height(), 200);
    }

    #[test]
    fn test_resize_up() {
        let img = DynamicImage::new_rgb8(100, 100);
        let resized = resize_image(&img, 300, 300).unwrap();
        assert_eq!(resized.width(), 300);
        assert_eq!(resized.height(), 300);
    }
}

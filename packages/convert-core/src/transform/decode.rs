use crate::errors::TransformError;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードする
///
/// フォーマットはマジックバイトから推測する
pub fn decode_image(input: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::ProcessingFailed(format!("failed to guess format: {e}")))?;

    reader
        .decode()
        .map_err(|e| TransformError::ProcessingFailed(format!("decode failed: {e}")))
}

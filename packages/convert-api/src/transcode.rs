use bytes::Bytes;

use convert_core::{
    calculate_target_dimensions, decode_image, encode_image, resize_image, OutputFormat,
    TransformError,
};

/// 画像バイト列を指定の幅・フォーマット・品質に変換する
///
/// デコード→リサイズ→エンコードを一つのリクエストタスク上で
/// 同期的に実行する（エンコード中に yield しない）。
/// メタデータ (EXIF/XMP) はデコード・エンコードサイクルで削除される
pub fn transcode(
    input: &Bytes,
    target_width: u32,
    format: OutputFormat,
    quality: u8,
) -> Result<Bytes, TransformError> {
    let img = decode_image(input)?;

    let (src_w, src_h) = (img.width(), img.height());
    let (dst_w, dst_h) = calculate_target_dimensions(src_w, src_h, target_width);

    let resized = if dst_w != src_w || dst_h != src_h {
        resize_image(&img, dst_w, dst_h)?
    } else {
        img
    };

    let output = encode_image(&resized, format, quality)?;
    Ok(Bytes::from(output))
}

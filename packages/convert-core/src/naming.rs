use crate::transform::OutputFormat;

/// URL の最後のパスセグメントからベース名を導出する
///
/// 最初のドット以降（拡張子など）は切り落とす
pub fn derive_base_name(image_url: &str) -> String {
    let last_segment = image_url.rsplit('/').next().unwrap_or(image_url);
    last_segment
        .split('.')
        .next()
        .unwrap_or(last_segment)
        .to_string()
}

/// プレフィックスを正規化する
///
/// 空なら空のまま、非空なら末尾のスラッシュを全て除いて `/` を1つ付ける
pub fn safe_prefix(file_prefix: &str) -> String {
    if file_prefix.is_empty() {
        String::new()
    } else {
        format!("{}/", file_prefix.trim_end_matches('/'))
    }
}

/// オブジェクトキーを構築する
///
/// 常に `{safe_prefix}{base_name}_{target_width}.{ext}` の形になる
pub fn object_key(
    base_name: &str,
    file_prefix: &str,
    target_width: u32,
    format: OutputFormat,
) -> String {
    format!(
        "{}{}_{}.{}",
        safe_prefix(file_prefix),
        base_name,
        target_width,
        format.extension()
    )
}

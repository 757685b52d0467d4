/// 幅のみ指定のリサイズ先寸法を計算する
///
/// アスペクト比を維持して高さを導出する。拡大も許可する
/// （元実装の sharp.resize(width) と同じ挙動）
pub fn calculate_target_dimensions(src_w: u32, src_h: u32, target_w: u32) -> (u32, u32) {
    let scale = target_w as f64 / src_w as f64;
    let new_h = (src_h as f64 * scale).round() as u32;

    // 最小1pxを保証
    (target_w.max(1), new_h.max(1))
}

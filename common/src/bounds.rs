//! 領域の座標検証
//!
//! レンダラ（WASM）とチェッカー（CLI）で共有する。違反のある領域は
//! 描画から除外する（ログに残すだけで致命傷にはしない）。

use crate::types::Region;

/// 領域の座標・寸法の違反を列挙する
///
/// 自然解像度（元画像のピクセル寸法）が分かっている場合は、
/// 右端・下端のはみ出しも検査する。
///
/// # Arguments
/// * `region` - 検査対象の領域
/// * `natural` - 元画像の (幅, 高さ)。不明なら `None`
///
/// # Returns
/// 人間可読の違反メッセージ（違反がなければ空）
pub fn region_violations(region: &Region, natural: Option<(f64, f64)>) -> Vec<String> {
    let mut violations = Vec::new();

    for (label, value) in [
        ("x", region.x),
        ("y", region.y),
        ("width", region.width),
        ("height", region.height),
    ] {
        if !value.is_finite() {
            violations.push(format!("{} が有限の数値ではありません", label));
        }
    }

    if region.width.is_finite() && region.width <= 0.0 {
        violations.push(format!("width は正の値が必要です（{}）", region.width));
    }
    if region.height.is_finite() && region.height <= 0.0 {
        violations.push(format!("height は正の値が必要です（{}）", region.height));
    }
    if region.x.is_finite() && region.x < 0.0 {
        violations.push(format!("x が負の値です（{}）", region.x));
    }
    if region.y.is_finite() && region.y < 0.0 {
        violations.push(format!("y が負の値です（{}）", region.y));
    }

    if let Some((natural_width, natural_height)) = natural {
        let right = region.x + region.width;
        let bottom = region.y + region.height;
        if right.is_finite() && right > natural_width {
            violations.push(format!(
                "右端 {} が画像幅 {} を超えています",
                right, natural_width
            ));
        }
        if bottom.is_finite() && bottom > natural_height {
            violations.push(format!(
                "下端 {} が画像高さ {} を超えています",
                bottom, natural_height
            ));
        }
    }

    violations
}

//! 整合性チェック
//!
//! 領域定義の各エントリについて、照合条件がデータセットの
//! 少なくとも1レコードに対応することを検査する。対応がない場合は
//! 警告（致命傷ではない）、ファイル不在・スキーマ不正は致命的エラー。

use crate::error::{ImagemapError, Result};
use imagemap_common::{bounds, matcher, parser, Record, Region};
use std::path::Path;

/// 1件の警告
#[derive(Debug, Clone)]
pub struct Warning {
    pub region_name: String,
    pub reason: String,
}

/// チェック結果
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub records_total: usize,
    pub regions_total: usize,
    pub warnings: Vec<Warning>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// データセットを読み込んで寛容パースする
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(ImagemapError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parser::parse_records(&content).map_err(|e| ImagemapError::InvalidData(e.to_string()))
}

/// 領域定義を読み込んでパース・スキーマ検証する
pub fn load_regions(path: &Path) -> Result<Vec<Region>> {
    if !path.exists() {
        return Err(ImagemapError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parser::parse_regions(&content).map_err(|e| ImagemapError::InvalidAreas(e.to_string()))
}

/// マップ画像の自然解像度を読む（ヘッダのみ）
pub fn read_image_dimensions(path: &Path) -> Result<(f64, f64)> {
    if !path.exists() {
        return Err(ImagemapError::FileNotFound(path.display().to_string()));
    }

    let (width, height) = image::image_dimensions(path)
        .map_err(|e| ImagemapError::ImageRead(format!("{}: {}", path.display(), e)))?;
    Ok((width as f64, height as f64))
}

/// 整合性チェック本体
///
/// 領域の定義順に検査し、以下を警告として報告する:
/// - 座標・寸法の違反（画像寸法が分かる場合ははみ出しも）
/// - 空の照合値
/// - 一致するレコードが1件もない照合条件
pub fn check_consistency(
    records: &[Record],
    regions: &[Region],
    natural: Option<(f64, f64)>,
) -> CheckReport {
    let mut warnings = Vec::new();

    for region in regions {
        for violation in bounds::region_violations(region, natural) {
            warnings.push(Warning {
                region_name: region.name.clone(),
                reason: violation,
            });
        }

        let target = region.match_target();
        if matcher::normalize(target).is_empty() {
            warnings.push(Warning {
                region_name: region.name.clone(),
                reason: "照合値（matchValue）が空です".to_string(),
            });
            continue;
        }

        if matcher::find_matches(records, &region.match_field, target).is_empty() {
            warnings.push(Warning {
                region_name: region.name.clone(),
                reason: format!(
                    "「{}」に一致するレコードがありません（フィールド: {}）",
                    target, region.match_field
                ),
            });
        }
    }

    CheckReport {
        records_total: records.len(),
        regions_total: regions.len(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(field: &str, value: &str) -> Record {
        let mut record = Record::new();
        record.insert(field.to_string(), json!(value));
        record
    }

    fn region(name: &str, match_field: &str, match_value: Option<&str>) -> Region {
        Region {
            name: name.to_string(),
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            match_field: match_field.to_string(),
            match_value: match_value.map(String::from),
        }
    }

    #[test]
    fn test_check_all_matched() {
        let records = vec![record("berth", "A1")];
        let regions = vec![region("Dock A", "berth", Some("A1"))];

        let report = check_consistency(&records, &regions, None);
        assert!(report.is_clean());
        assert_eq!(report.regions_total, 1);
        assert_eq!(report.records_total, 1);
    }

    #[test]
    fn test_check_unmatched_region_warns_with_value() {
        let records = vec![record("berth", "A1")];
        let regions = vec![region("Dock A", "berth", Some("Z9"))];

        let report = check_consistency(&records, &regions, None);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].region_name, "Dock A");
        assert!(report.warnings[0].reason.contains("Z9"));
    }

    #[test]
    fn test_check_empty_match_value_warns() {
        let records = vec![record("berth", "A1")];
        let regions = vec![region("  ", "berth", None)];

        let report = check_consistency(&records, &regions, None);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].reason.contains("matchValue"));
    }

    #[test]
    fn test_check_bounds_violation_with_image() {
        let records = vec![record("berth", "Dock A")];
        let mut out_of_bounds = region("Dock A", "berth", None);
        out_of_bounds.x = 10.0;
        out_of_bounds.width = 100.0;

        let report = check_consistency(&records, &[out_of_bounds], Some((90.0, 200.0)));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].reason.contains("右端"));
    }

    #[test]
    fn test_check_warnings_preserve_region_order() {
        let records = vec![record("berth", "A1")];
        let regions = vec![
            region("Dock B", "berth", Some("Z8")),
            region("Dock C", "berth", Some("Z9")),
        ];

        let report = check_consistency(&records, &regions, None);
        let names: Vec<_> = report.warnings.iter().map(|w| w.region_name.as_str()).collect();
        assert_eq!(names, vec!["Dock B", "Dock C"]);
    }
}

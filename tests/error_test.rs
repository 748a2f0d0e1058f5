//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use imagemap_rust::checker;
use imagemap_rust::error::ImagemapError;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないデータファイル
#[test]
fn test_load_records_nonexistent_file() {
    let result = checker::load_records(Path::new("/nonexistent/path/data-12345.json"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, ImagemapError::FileNotFound(_)));
}

/// 修復もできない壊れたデータ
#[test]
fn test_load_records_unrepairable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");
    std::fs::write(&path, "[{a: one, two}]").unwrap();

    let result = checker::load_records(&path);
    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ImagemapError::InvalidData(_)));
}

/// 必須フィールド欠落の領域定義
#[test]
fn test_load_regions_missing_required_field() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("areas.json");
    std::fs::write(&path, r#"[{"x":0,"y":0,"width":1,"height":1,"matchField":"berth"}]"#).unwrap();

    let result = checker::load_regions(&path);
    assert!(result.is_err());

    let message = format!("{}", result.unwrap_err());
    assert!(message.contains("name"));
    assert!(message.contains('1'));
}

/// 画像でないファイルの寸法読み取り
#[test]
fn test_read_image_dimensions_invalid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("map.png");
    std::fs::write(&path, "not an image").unwrap();

    let result = checker::read_image_dimensions(&path);
    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), ImagemapError::ImageRead(_)));
}

/// ImagemapErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ImagemapError::Config("テスト設定エラー".to_string()),
        ImagemapError::FileNotFound("data.json".to_string()),
        ImagemapError::InvalidData("壊れた入力".to_string()),
        ImagemapError::InvalidAreas("スキーマ不正".to_string()),
        ImagemapError::ImageRead("map.png".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

use clap::Parser;
use imagemap_rust::{checker, cli, config, error};

use cli::Cli;
use config::Config;
use error::Result;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    println!("🗺  imagemap - 整合性チェック\n");

    // 1. データセット読み込み
    println!("[1/3] データセットを読み込み中...");
    let records = checker::load_records(&cli.data)?;
    println!("✔ {}件のレコードを検出\n", records.len());

    // 2. 領域定義読み込み
    let areas_path = cli
        .areas
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.default_areas_file));
    println!("[2/3] 領域定義を読み込み中...");
    let regions = checker::load_regions(&areas_path)?;
    println!("✔ {}件の領域を検出\n", regions.len());

    // 画像寸法（--image 指定時のみ座標検証に使う）
    let natural = match &cli.image {
        Some(path) => {
            let dimensions = checker::read_image_dimensions(path)?;
            if cli.verbose {
                println!("- 画像寸法: {}x{}", dimensions.0, dimensions.1);
            }
            Some(dimensions)
        }
        None => None,
    };

    // 3. 照合チェック
    println!("[3/3] 照合チェック中...");
    let report = checker::check_consistency(&records, &regions, natural);

    if cli.verbose {
        for region in &regions {
            let matched = imagemap_common::find_matches(
                &records,
                &region.match_field,
                region.match_target(),
            );
            println!("- {}: {}件一致", region.name, matched.len());
        }
    }

    if report.is_clean() {
        println!(
            "\n✅ すべての領域にレコードが対応しています（領域{}件 / レコード{}件）",
            report.regions_total, report.records_total
        );
    } else {
        for warning in &report.warnings {
            println!("- {}: {}", warning.region_name, warning.reason);
        }
        println!(
            "\n⚠ 警告{}件（領域{}件 / レコード{}件）",
            report.warnings.len(),
            report.regions_total,
            report.records_total
        );
    }

    // 警告は終了コード0のまま。致命的エラーのみErr（終了コード1）
    Ok(())
}

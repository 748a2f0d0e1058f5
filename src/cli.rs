use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imagemap")]
#[command(
    about = "画像マップの領域定義とデータセットの整合性チェックツール",
    long_about = None
)]
pub struct Cli {
    /// レコードデータセットのJSONファイル
    #[arg(long, required = true)]
    pub data: PathBuf,

    /// 領域定義のJSONファイル（デフォルト: interactiveAreas.json）
    #[arg(long)]
    pub areas: Option<PathBuf>,

    /// マップ画像（指定時は領域の座標を画像寸法に対しても検証）
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

//! 共有型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Record: データセット1行分（フィールド名→スカラー値の自由なマップ）
//! - Region: 画像上のクリック可能領域の定義

use serde::{Deserialize, Serialize};

/// データセットの1レコード
///
/// 固定スキーマを持たない。初期化時に一度だけ生成され、以後変更しない。
pub type Record = serde_json::Map<String, serde_json::Value>;

/// 画像上のオーバーレイ領域
///
/// 座標・寸法は元画像の自然解像度でのピクセル値。
/// `match_field` で照合対象のレコードフィールドを、`match_value` で
/// 照合値を指定する（省略時は `name` を照合値として使う）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub match_field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_value: Option<String>,
}

impl Region {
    /// 照合に使う値（`matchValue` 省略時は `name`）
    pub fn match_target(&self) -> &str {
        self.match_value.as_deref().unwrap_or(&self.name)
    }
}

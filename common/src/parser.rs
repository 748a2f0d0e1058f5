//! 寛容パーサー
//!
//! 緩い形式のテキスト（未クオートのキー・値、カンマ小数を含む
//! JSONもどき）からレコード配列・領域定義をパースする。
//!
//! 処理順序:
//! 1. 厳密パース（serde_json）を試す
//! 2. 失敗したら修復パース（キー・値のクオート付与、カンマ小数の変換）
//! 3. それでも失敗したらParseError

use crate::error::{Error, Result};
use crate::schema;
use crate::types::{Record, Region};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// オブジェクト境界: `}` 空白 カンマ(省略可) 空白 `{`
    ///
    /// 文字列値の中に `},{` が現れないことを前提とする（既知の制限）
    static ref CHUNK_DELIMITER_RE: Regex = Regex::new(r"\}\s*,?\s*\{").unwrap();
    /// カンマ小数の値（例: `y: 5,5`）
    static ref COMMA_DECIMAL_RE: Regex = Regex::new(r":(\s*)(-?\d+),(\d+)(\s*[,}])").unwrap();
    /// 未クオートのキー（`{` または `,` とコロンの間）
    static ref BARE_KEY_RE: Regex = Regex::new(r#"([{,]\s*)([^"\s:,{}][^":]*?)\s*:"#).unwrap();
    /// 値（コロンと `,` または `}` の間）
    static ref VALUE_RE: Regex = Regex::new(r#":\s*([^,{}]+?)\s*([,}])"#).unwrap();
    /// 数値として扱えるテキスト
    static ref NUMERIC_RE: Regex = Regex::new(r"^-?\d+(\.\d+)?$").unwrap();
}

/// レコード配列をパース
///
/// まず厳密なJSONパースを試し、配列として解釈できればそのまま返す。
/// 失敗した場合は修復パースにフォールバックする。
///
/// # Arguments
/// * `text` - フラットなオブジェクト配列を表すテキスト
///
/// # Returns
/// * `Ok(Vec<Record>)` - パース成功
/// * `Err` - 両方のパースが失敗した場合
///
/// # Examples
/// ```
/// use imagemap_common::parse_records;
///
/// // 未クオートのキー・値も修復してパースできる
/// let records = parse_records("[{name: Pier A, x: 10}]").unwrap();
/// assert_eq!(records[0]["name"], "Pier A");
/// assert_eq!(records[0]["x"], 10.0);
/// ```
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    // 厳密パース（整形済み入力の高速パス）
    if let Ok(records) = serde_json::from_str::<Vec<Record>>(text) {
        return Ok(records);
    }

    repair_records_text(text)
}

/// 領域定義をパース
///
/// 寛容パースの後、スキーマ検証（必須フィールド・数値の強制変換）を
/// 通してから型付きのRegionへ変換する。
///
/// # Arguments
/// * `text` - Region定義の配列を表すテキスト
pub fn parse_regions(text: &str) -> Result<Vec<Region>> {
    let mut values: Vec<serde_json::Value> = parse_records(text)?
        .into_iter()
        .map(serde_json::Value::Object)
        .collect();

    schema::validate_region_values(&mut values)?;

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            serde_json::from_value(value)
                .map_err(|e| Error::Parse(format!("領域 {} を変換できません: {}", i + 1, e)))
        })
        .collect()
}

/// 修復パース
///
/// 外側の `[` `]` を外し、`},{` パターンでオブジェクト単位に分割して
/// 1つずつ修復・パースする。
fn repair_records_text(text: &str) -> Result<Vec<Record>> {
    let trimmed = text.trim();
    let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    let mut records = Vec::new();
    for chunk in CHUNK_DELIMITER_RE.split(inner) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }

        let repaired = repair_chunk(&rewrap_chunk(chunk));
        let record: Record = serde_json::from_str(&repaired)
            .map_err(|e| Error::Parse(format!("修復後も解析できない断片: {} ({})", chunk, e)))?;
        records.push(record);
    }

    Ok(records)
}

/// 分割で失われた `{` `}` を補う
fn rewrap_chunk(chunk: &str) -> String {
    let mut result = String::with_capacity(chunk.len() + 2);
    if !chunk.starts_with('{') {
        result.push('{');
    }
    result.push_str(chunk);
    if !chunk.ends_with('}') {
        result.push('}');
    }
    result
}

/// 1オブジェクト分のテキストを修復する
///
/// 1. カンマ小数をドット小数に書き換え（`5,5` → `5.5`）
/// 2. 未クオートのキーをクオート
/// 3. 未クオートの値をクオート（数値は除く）
fn repair_chunk(chunk: &str) -> String {
    let with_decimals = COMMA_DECIMAL_RE.replace_all(chunk, ":${1}${2}.${3}${4}");

    let with_keys = BARE_KEY_RE.replace_all(&with_decimals, "${1}\"${2}\":");

    VALUE_RE
        .replace_all(&with_keys, |caps: &regex::Captures| {
            let raw = &caps[1];
            let delimiter = &caps[2];
            if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
                // クオート済みの文字列はそのまま
                format!(": {}{}", raw, delimiter)
            } else if NUMERIC_RE.is_match(raw) {
                format!(": {}{}", raw, delimiter)
            } else {
                format!(": \"{}\"{}", escape_text(raw), delimiter)
            }
        })
        .into_owned()
}

/// クオート付与時のエスケープ
fn escape_text(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

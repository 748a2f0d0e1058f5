//! レコード照合モジュール
//!
//! 領域の照合条件（フィールド名＋照合値）でレコード集合を検索する。
//! 比較は正規化（トリム・空白圧縮・小文字化）した上で、完全一致
//! または部分文字列の包含（双方向）で判定する。

use crate::types::Record;
use serde_json::Value;

/// 比較用の正規化
///
/// 前後の空白を除去し、連続する空白を1つにまとめ、小文字化する。
///
/// # Examples
/// ```
/// use imagemap_common::matcher::normalize;
///
/// assert_eq!(normalize("  Pier   A "), "pier a");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// レコードの対象フィールドをテキストとして取り出す
///
/// 欠落・null・空文字・0・false はいずれも「値なし」として
/// `None` を返す（比較対象から外れる）。
pub fn field_text(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// 照合条件に一致するレコードを抽出する
///
/// 正規化後に等しいか、一方が他方を部分文字列として含むレコードを
/// 入力順のまま返す。照合値が正規化後に空なら何も返さない
/// （空のmatchValueは外部のチェッカーが警告として扱う）。
///
/// # Arguments
/// * `records` - レコード集合
/// * `field` - 照合対象のフィールド名
/// * `target` - 照合値
pub fn find_matches<'a>(records: &'a [Record], field: &str, target: &str) -> Vec<&'a Record> {
    let needle = normalize(target);
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| {
            field_text(record, field)
                .map(|text| {
                    let haystack = normalize(&text);
                    haystack == needle
                        || haystack.contains(&needle)
                        || needle.contains(&haystack)
                })
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(field: &str, value: Value) -> Record {
        let mut record = Record::new();
        record.insert(field.to_string(), value);
        record
    }

    // =============================================
    // normalize
    // =============================================

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Pier   A "), "pier a");
        assert_eq!(normalize("pier a"), "pier a");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("   "), "");
    }

    // =============================================
    // find_matches
    // =============================================

    #[test]
    fn test_find_matches_exact_after_normalization() {
        let records = vec![record("berth", json!("  Pier   A "))];

        let matches = find_matches(&records, "berth", "pier a");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_find_matches_substring_both_directions() {
        let records = vec![
            record("berth", json!("Pier A Extension")),
            record("berth", json!("Pier")),
        ];

        // レコード値が照合値を含む場合も、その逆も一致
        let matches = find_matches(&records, "berth", "Pier A");
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_find_matches_numeric_field() {
        let records = vec![record("berth", json!(12))];

        let matches = find_matches(&records, "berth", "12");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_find_matches_excludes_missing_and_falsy() {
        let records = vec![
            record("berth", json!("A1")),
            record("berth", json!("")),
            record("berth", json!(null)),
            record("berth", json!(0)),
            record("other", json!("A1")),
        ];

        let matches = find_matches(&records, "berth", "A1");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_find_matches_empty_target_matches_nothing() {
        let records = vec![record("berth", json!("A1"))];

        assert!(find_matches(&records, "berth", "").is_empty());
        assert!(find_matches(&records, "berth", "   ").is_empty());
    }

    #[test]
    fn test_find_matches_preserves_input_order() {
        let records = vec![
            record("berth", json!("Pier B")),
            record("berth", json!("Pier A")),
            record("berth", json!("Pier A Extension")),
        ];

        let matches = find_matches(&records, "berth", "Pier A");
        let values: Vec<_> = matches
            .iter()
            .map(|r| r["berth"].as_str().unwrap())
            .collect();
        assert_eq!(values, vec!["Pier A", "Pier A Extension"]);
    }
}

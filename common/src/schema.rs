//! 領域定義のスキーマ検証
//!
//! 必須フィールドの存在と型を検証し、数値フィールドを
//! その場で（in place）JSON数値へ強制変換する。

use crate::error::{Error, Result};
use serde_json::Value;

/// フィールドの期待型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Numeric,
}

/// 必須フィールドと期待型
const REQUIRED_FIELDS: [(&str, FieldKind); 6] = [
    ("name", FieldKind::Text),
    ("x", FieldKind::Numeric),
    ("y", FieldKind::Numeric),
    ("width", FieldKind::Numeric),
    ("height", FieldKind::Numeric),
    ("matchField", FieldKind::Text),
];

/// 領域定義の検証と強制変換
///
/// 各オブジェクトについて必須フィールドを確認し、`x`/`y`/`width`/`height` を
/// JSON数値に書き換える（カンマ小数の文字列も受け付ける）。任意フィールドの
/// `matchValue` は数値なら文字列化する。
///
/// 入力を直接書き換える点に注意（純関数ではない）。
///
/// # Arguments
/// * `values` - 領域定義のオブジェクト列（書き換えられる）
///
/// # Returns
/// * `Err(MissingField)` - 必須フィールドの欠落（1始まりの位置つき）
/// * `Err(InvalidType)` - 期待型へ変換できない値
pub fn validate_region_values(values: &mut [Value]) -> Result<()> {
    for (i, value) in values.iter_mut().enumerate() {
        let index = i + 1;

        let Some(object) = value.as_object_mut() else {
            return Err(Error::InvalidType {
                index,
                field: "(region)",
                expected: "object",
            });
        };

        for (field, kind) in REQUIRED_FIELDS {
            let Some(field_value) = object.get_mut(field) else {
                return Err(Error::MissingField { index, field });
            };

            match kind {
                FieldKind::Text => {
                    if !field_value.is_string() {
                        return Err(Error::InvalidType {
                            index,
                            field,
                            expected: "string",
                        });
                    }
                }
                FieldKind::Numeric => {
                    let number = coerce_number(field_value).ok_or(Error::InvalidType {
                        index,
                        field,
                        expected: "number",
                    })?;
                    *field_value = Value::Number(number);
                }
            }
        }

        // matchValue は任意。数値は文字列化、それ以外の非文字列は型エラー
        if let Some(match_value) = object.get_mut("matchValue") {
            match &*match_value {
                Value::String(_) | Value::Null => {}
                Value::Number(n) => {
                    let text = n.to_string();
                    *match_value = Value::String(text);
                }
                _ => {
                    return Err(Error::InvalidType {
                        index,
                        field: "matchValue",
                        expected: "string",
                    });
                }
            }
        }
    }

    Ok(())
}

/// 数値への強制変換
///
/// JSON数値はそのまま、文字列はカンマ小数をドットに直してから解釈する。
/// 有限値のみ受け付ける。
fn coerce_number(value: &Value) -> Option<serde_json::Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let parsed: f64 = s.trim().replace(',', ".").parse().ok()?;
            serde_json::Number::from_f64(parsed)
        }
        _ => None,
    }
}

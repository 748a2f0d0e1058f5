//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// パース・スキーマ・リソース・画像の4系統。どのエラーも
/// 初期化境界より外へは伝播させない（呼び出し側で表示に変換する）。
#[derive(Error, Debug)]
pub enum Error {
    /// 厳密パースと修復パースの両方が失敗した
    #[error("parse error: {0}")]
    Parse(String),

    /// 必須フィールドの欠落（indexは1始まり）
    #[error("schema error: region {index} is missing required field \"{field}\"")]
    MissingField { index: usize, field: &'static str },

    /// フィールドの型不一致（indexは1始まり）
    #[error("schema error: region {index} field \"{field}\" is not a valid {expected}")]
    InvalidType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    /// リソース取得の失敗（非成功ステータスを含む）
    #[error("resource error: {0}")]
    Resource(String),

    /// 画像の読み込み失敗（フォールバック後）
    #[error("image error: {0}")]
    Image(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

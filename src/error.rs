use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagemapError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データセットが不正: {0}")]
    InvalidData(String),

    #[error("領域定義が不正: {0}")]
    InvalidAreas(String),

    #[error("画像を読み込めません: {0}")]
    ImageRead(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImagemapError>;

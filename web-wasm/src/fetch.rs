//! 領域定義リソースの取得
//!
//! 一度だけのベストエフォート取得。失敗してもリトライしない。

use imagemap_common::{Error, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// URLからテキストを取得する
///
/// # Arguments
/// * `url` - 領域定義リソースのURLまたは相対パス
///
/// # Returns
/// * `Ok(String)` - レスポンス本文
/// * `Err(Resource)` - 取得失敗または非成功ステータス
pub async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| Error::Resource(format!("リクエスト生成に失敗: {:?}", e)))?;

    let window =
        web_sys::window().ok_or_else(|| Error::Resource("windowが取得できません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| Error::Resource(format!("取得に失敗: {:?}", e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::Resource("Responseでない応答".into()))?;

    if !resp.ok() {
        return Err(Error::Resource(format!("HTTP {}", resp.status())));
    }

    let text_value = JsFuture::from(
        resp.text()
            .map_err(|e| Error::Resource(format!("本文の取得に失敗: {:?}", e)))?,
    )
    .await
    .map_err(|e| Error::Resource(format!("本文の読み取りに失敗: {:?}", e)))?;

    text_value
        .as_string()
        .ok_or_else(|| Error::Resource("本文が文字列ではありません".into()))
}

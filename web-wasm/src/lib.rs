//! Imagemap Web Viewer (Leptos + WASM)

mod app;
mod components;
mod fetch;
mod hover;

use app::{App, InitOptions};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// ホストページから呼ぶ初期化関数
///
/// 暗黙のグローバル変数ではなく、オプションを明示的に受け取る:
/// `{ mapImagePath, recordsSource, regionsSource, fallbackImagePath?, popupDelayMs? }`
#[wasm_bindgen(js_name = initImageMap)]
pub fn init_image_map(options: JsValue) -> Result<(), JsValue> {
    let options: InitOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("初期化オプションが不正: {}", e)))?;

    leptos::mount::mount_to_body(move || view! { <App options=options /> });
    Ok(())
}

//! メインアプリケーションコンポーネント
//!
//! 初期化オプションを受け取り、レコード・領域定義を読み込んで
//! マップ表示とステータスバナーを組み立てる。
//!
//! 共有状態（レコード・領域・読み込み状態）は初期化と読み込み完了の
//! 経路だけが書き込み、描画・照合の経路は読むだけ。

use crate::components::{map_view::MapView, status_banner::StatusBanner};
use crate::fetch;
use imagemap_common::{parse_records, parse_regions, Record, Region};
use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;

/// 初期化オプション
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    /// マップ画像のパス
    pub map_image_path: String,

    /// 読み込み失敗時に一度だけ試すフォールバック画像
    #[serde(default = "default_fallback_image")]
    pub fallback_image_path: String,

    /// レコードデータセット（テキストまたはパース済み配列）
    pub records_source: RecordsSource,

    /// 領域定義（インラインテキストまたはURL）
    pub regions_source: String,

    /// ポインタ進入からポップアップ表示までの遅延
    #[serde(default = "default_popup_delay_ms")]
    pub popup_delay_ms: u32,
}

fn default_fallback_image() -> String {
    "map.png".to_string()
}

fn default_popup_delay_ms() -> u32 {
    250
}

/// レコードの供給元
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordsSource {
    Records(Vec<Record>),
    Text(String),
}

impl InitOptions {
    /// regionsSource がインラインテキストかURLかの判定
    ///
    /// 先頭が `[` / `{` ならインライン、それ以外はURLとして扱う
    pub fn regions_source_is_inline(&self) -> bool {
        let trimmed = self.regions_source.trim_start();
        trimmed.starts_with('[') || trimmed.starts_with('{')
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(options: InitOptions) -> impl IntoView {
    // 読み込みエラーの常時表示（ページは落とさない）
    let (errors, set_errors) = signal(Vec::<String>::new());
    let push_error = Callback::new(move |message: String| {
        set_errors.update(|errors| errors.push(message));
    });

    // レコードは初期化時に一度だけ生成し、以後変更しない
    let initial_records = match &options.records_source {
        RecordsSource::Records(records) => records.clone(),
        RecordsSource::Text(text) => match parse_records(text) {
            Ok(records) => records,
            Err(e) => {
                set_errors.update(|errors| {
                    errors.push(format!("レコードを読み込めません: {}", e));
                });
                Vec::new()
            }
        },
    };
    let (records, _set_records) = signal(initial_records);

    // 領域定義: インラインは即時パース、URLは一度だけ取得（リトライなし）
    let (regions, set_regions) = signal(Vec::<Region>::new());
    if options.regions_source_is_inline() {
        match parse_regions(&options.regions_source) {
            Ok(parsed) => set_regions.set(parsed),
            Err(e) => set_errors.update(|errors| {
                errors.push(format!("領域定義を読み込めません: {}", e));
            }),
        }
    } else {
        let url = options.regions_source.clone();
        spawn_local(async move {
            let loaded = match fetch::fetch_text(&url).await {
                Ok(text) => parse_regions(&text),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(parsed) => set_regions.set(parsed),
                Err(e) => set_errors.update(|errors| {
                    errors.push(format!("領域定義を読み込めません: {}", e));
                }),
            }
        });
    }

    view! {
        <div class="imagemap-container">
            <StatusBanner errors=errors />
            <MapView
                image_path=options.map_image_path.clone()
                fallback_image_path=options.fallback_image_path.clone()
                popup_delay_ms=options.popup_delay_ms
                records=records
                regions=regions
                on_error=push_error
            />
        </div>
    }
}

//! マップ表示コンポーネント
//!
//! 画像の上に領域オーバーレイを重ねる。領域の座標は元画像の
//! 自然解像度で定義されているため、表示サイズとの比で拡縮する。
//!
//! 座標違反のある領域は描画から除外し、コンソールに記録する。
//! 画像の読み込み失敗はフォールバックを一度だけ試し、それでも
//! 失敗したら常時表示のエラーオーバーレイに切り替える。

use imagemap_common::{find_matches, region_violations, Error, Record, Region};
use leptos::html::{Div, Img};
use leptos::prelude::*;
use web_sys::PointerEvent;

use crate::components::popup::{Popup, PopupContent};
use crate::hover::DeferredTask;

#[component]
pub fn MapView(
    image_path: String,
    fallback_image_path: String,
    popup_delay_ms: u32,
    records: ReadSignal<Vec<Record>>,
    regions: ReadSignal<Vec<Region>>,
    on_error: Callback<String>,
) -> impl IntoView {
    let image_ref = NodeRef::<Img>::new();
    let container_ref = NodeRef::<Div>::new();

    let (image_src, set_image_src) = signal(image_path);
    let (fallback_used, set_fallback_used) = signal(false);
    let (image_failed, set_image_failed) = signal(false);
    let (natural, set_natural) = signal(None::<(f64, f64)>);
    let (display, set_display) = signal(None::<(f64, f64)>);
    let (popup, set_popup) = signal(None::<PopupContent>);

    // ホバー遅延（保留は常に高々1件）
    let hover_task = StoredValue::new_local(DeferredTask::new());

    let measure_display = move || {
        if let Some(image) = image_ref.get_untracked() {
            set_display.set(Some((
                image.client_width() as f64,
                image.client_height() as f64,
            )));
        }
    };

    // 自然解像度は読み込み時に一度だけ。表示サイズはリサイズで変わる
    let on_image_load = move |_| {
        if let Some(image) = image_ref.get_untracked() {
            set_natural.set(Some((
                image.natural_width() as f64,
                image.natural_height() as f64,
            )));
        }
        measure_display();
    };

    let _resize_listener = window_event_listener(leptos::ev::resize, move |_| measure_display());

    let on_image_error = move |_| {
        if !fallback_used.get_untracked() {
            // フォールバックは一度だけ。それ以上はリトライしない
            set_fallback_used.set(true);
            set_image_src.set(fallback_image_path.clone());
        } else {
            set_image_failed.set(true);
            let error =
                Error::Image("マップ画像を読み込めませんでした（フォールバック含む）".to_string());
            on_error.run(error.to_string());
        }
    };

    // 座標違反のない領域だけを描画対象にする
    let visible_regions = Memo::new(move |_| {
        let Some(dimensions) = natural.get() else {
            return Vec::new();
        };
        regions
            .get()
            .into_iter()
            .filter(|region| {
                let violations = region_violations(region, Some(dimensions));
                for violation in &violations {
                    web_sys::console::warn_1(
                        &format!("領域「{}」を描画から除外: {}", region.name, violation).into(),
                    );
                }
                violations.is_empty()
            })
            .collect::<Vec<_>>()
    });

    let scale = move || match (natural.get(), display.get()) {
        (Some((natural_w, natural_h)), Some((display_w, display_h)))
            if natural_w > 0.0 && natural_h > 0.0 =>
        {
            (display_w / natural_w, display_h / natural_h)
        }
        _ => (1.0, 1.0),
    };

    view! {
        <div class="imagemap-map" node_ref=container_ref>
            <img
                class="imagemap-image"
                node_ref=image_ref
                src=move || image_src.get()
                on:load=on_image_load
                on:error=on_image_error
            />
            <Show when=move || !image_failed.get()>
                <For
                    each=move || visible_regions.get()
                    key=|region| region.name.clone()
                    children=move |region: Region| {
                        let enter_region = region.clone();
                        let style = {
                            let region = region.clone();
                            move || {
                                let (scale_x, scale_y) = scale();
                                format!(
                                    "left:{}px;top:{}px;width:{}px;height:{}px",
                                    region.x * scale_x,
                                    region.y * scale_y,
                                    region.width * scale_x,
                                    region.height * scale_y,
                                )
                            }
                        };
                        view! {
                            <div
                                class="imagemap-region"
                                style=style
                                on:pointerenter=move |ev: PointerEvent| {
                                    let region = enter_region.clone();
                                    let point = popup_point(&ev, container_ref);
                                    hover_task.update_value(|task| {
                                        task.schedule(popup_delay_ms, move || {
                                            let records_now = records.get_untracked();
                                            set_popup.set(Some(build_popup(&records_now, &region, point)));
                                        });
                                    });
                                }
                                on:pointerleave=move |_| {
                                    hover_task.update_value(|task| task.cancel());
                                    set_popup.set(None);
                                }
                            />
                        }
                    }
                />
            </Show>
            <Popup content=popup />
            <Show when=move || image_failed.get()>
                <div class="imagemap-image-error">
                    <p>"マップ画像を読み込めませんでした"</p>
                    <p class="imagemap-image-error-hint">
                        "mapImagePath の設定とフォールバック画像の配置を確認してください"
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// コンテナ左上を原点としたポップアップ表示位置
fn popup_point(ev: &PointerEvent, container_ref: NodeRef<Div>) -> (f64, f64) {
    let Some(container) = container_ref.get_untracked() else {
        return (ev.client_x() as f64, ev.client_y() as f64);
    };
    let rect = container.get_bounding_client_rect();
    (
        ev.client_x() as f64 - rect.left() + 12.0,
        ev.client_y() as f64 - rect.top() + 12.0,
    )
}

/// 一致レコードからポップアップ内容を組み立てる
///
/// ホバーのたびに導出する（キャッシュしない）。
fn build_popup(records: &[Record], region: &Region, point: (f64, f64)) -> PopupContent {
    let matched = find_matches(records, &region.match_field, region.match_target());
    let lines = if matched.is_empty() {
        vec!["対応するレコードがありません".to_string()]
    } else {
        matched.iter().map(|record| record_line(record)).collect()
    };

    PopupContent {
        title: region.name.clone(),
        lines,
        x: point.0,
        y: point.1,
    }
}

/// レコード1件を「フィールド: 値」の1行に整形する
fn record_line(record: &Record) -> String {
    record
        .iter()
        .map(|(field, value)| {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{}: {}", field, text)
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

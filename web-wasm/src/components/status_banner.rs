//! 読み込みエラーの常時表示バナー
//!
//! パース・スキーマ・リソース・画像のエラーをページを落とさずに示す。

use leptos::prelude::*;

#[component]
pub fn StatusBanner(errors: ReadSignal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || !errors.get().is_empty()>
            <div class="imagemap-status">
                <p class="imagemap-status-title">"読み込みエラー"</p>
                <ul class="imagemap-status-list">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|message| view! { <li>{message}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </Show>
    }
}

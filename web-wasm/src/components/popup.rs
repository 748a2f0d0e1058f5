//! ホバーポップアップ
//!
//! 照合結果から組み立てた内容を、ポインタ位置の近くに表示する。

use leptos::prelude::*;

/// ポップアップの内容と表示位置（コンテナ左上が原点）
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub lines: Vec<String>,
    pub x: f64,
    pub y: f64,
}

#[component]
pub fn Popup(content: ReadSignal<Option<PopupContent>>) -> impl IntoView {
    view! {
        {move || {
            content.get().map(|content| {
                view! {
                    <div
                        class="imagemap-popup"
                        style=format!("left:{}px;top:{}px", content.x, content.y)
                    >
                        <p class="imagemap-popup-title">{content.title.clone()}</p>
                        <ul class="imagemap-popup-lines">
                            {content
                                .lines
                                .iter()
                                .map(|line| view! { <li>{line.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                }
            })
        }}
    }
}

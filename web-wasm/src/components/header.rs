//! ヘッダーコンポーネント（テーマ切り替え付き）

use crate::browser::{apply_theme, initial_theme, save_theme};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let theme = RwSignal::new(initial_theme());
    apply_theme(theme.get_untracked());

    let on_toggle = move |_| {
        let next = theme.get_untracked().toggle();
        theme.set(next);
        apply_theme(next);
        save_theme(next);
    };

    view! {
        <header class="header">
            <h1>"Portfolio Projects"</h1>
            <button class="theme-toggle" type="button" on:click=on_toggle>
                {move || theme.get().button_label()}
            </button>
        </header>
    }
}

//! 保存先の切り替え

use crate::app::use_admin;
use leptos::prelude::*;
use portfolio_common::StorageMode;

fn mode_label(mode: StorageMode) -> &'static str {
    match mode {
        StorageMode::Local => "Local Storage",
        StorageMode::Remote => "Remote Server",
    }
}

#[component]
pub fn ModeSelector() -> impl IntoView {
    let ctx = use_admin();

    let options = [StorageMode::Local, StorageMode::Remote]
        .into_iter()
        .map(|mode| {
            view! {
                <label class="mode-option">
                    <input
                        type="radio"
                        name="storage-mode"
                        value=mode.as_str()
                        prop:checked=move || ctx.mode.get() == mode
                        on:change=move |_| {
                            ctx.mode.set(mode);
                            ctx.reload();
                        }
                    />
                    {mode_label(mode)}
                </label>
            }
        })
        .collect_view();

    view! {
        <fieldset class="mode-selector">
            <legend>"Storage"</legend>
            {options}
        </fieldset>
    }
}

//! 設定パネルコンポーネント
//!
//! リモートストアのURLとキーはメモリ上だけに保持する。

use crate::app::use_admin;
use leptos::prelude::*;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_admin();

    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="remote-url">"Remote document URL"</label>
                    <input
                        type="url"
                        id="remote-url"
                        placeholder="https://api.jsonbin.io/v3/b/..."
                        prop:value=move || ctx.remote_url.get()
                        on:input=move |ev| {
                            ctx.remote_url.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="api-key">"API key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="X-Master-Key"
                        autocomplete="off"
                        prop:value=move || ctx.api_key.get()
                        on:input=move |ev| {
                            ctx.api_key.set(event_target_value(&ev));
                        }
                    />
                    <div class="text-muted">"Kept in memory only. Reloading the page clears it."</div>
                </div>
            </div>
        </div>
    }
}

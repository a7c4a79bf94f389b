use crate::app::use_admin;
use leptos::prelude::*;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let ctx = use_admin();

    move || {
        ctx.status.get().map(|status| {
            view! {
                <div class=format!("status-message {}", status.kind.as_str()) role="status">
                    {status.message}
                </div>
            }
        })
    }
}

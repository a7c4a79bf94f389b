//! 更新フォーム
//!
//! セレクタで選んだ位置のレコードをフォームに読み込み、送信で置き換える。

use crate::app::use_admin;
use crate::components::project_fields::ProjectFields;
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{option_label, FormController, StoreError};

#[component]
pub fn UpdateForm() -> impl IntoView {
    let ctx = use_admin();
    let form = ctx.update_form;
    let selection = ctx.update_selection;
    let (saving, set_saving) = signal(false);

    let on_select = move |ev: Event| {
        let value = event_target_value(&ev);
        spawn_local(async move {
            let service = ctx.service();
            let controller = FormController::new(&service);
            match controller.select_for_update(&value).await {
                Ok(Some((selected, values))) => {
                    selection.set(Some(selected));
                    form.set(values);
                }
                Ok(None) => ctx.clear_update_selection(),
                Err(_) => {}
            }
        });
    };

    let on_cancel = move |_| ctx.clear_update_selection();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let selected = selection.get_untracked();
        let values = form.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            let service = ctx.service();
            let controller = FormController::new(&service);
            match controller.submit_update(selected.as_ref(), &values).await {
                Ok(()) | Err(StoreError::SelectionChanged { .. }) => ctx.reload(),
                Err(_) => {}
            }
            set_saving.set(false);
        });
    };

    let options = move || {
        ctx.projects.with(|collection| {
            collection
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    view! {
                        <option
                            value=index.to_string()
                            selected=move || selection.with(|s| s.as_ref().map(|s| s.index) == Some(index))
                        >
                            {option_label(record)}
                        </option>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <h2>"Update Project"</h2>
            <div class="form-group">
                <label for="update-select">"Project"</label>
                <select id="update-select" on:change=on_select>
                    <option value="" selected=move || selection.with(Option::is_none)>
                        "Select a project..."
                    </option>
                    {options}
                </select>
            </div>

            <ProjectFields form=form prefix="update" />

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Update Project" }}
                </button>
                <button type="button" class="btn btn-secondary" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}

//! フォームの入力欄一式

use leptos::ev::Event;
use leptos::prelude::*;
use portfolio_common::{Field, ProjectForm};

/// `prefix`は作成フォームと更新フォームで要素IDが重ならないようにするためのもの
#[component]
pub fn ProjectFields(form: RwSignal<ProjectForm>, prefix: &'static str) -> impl IntoView {
    Field::ALL
        .into_iter()
        .map(|field| {
            let id = format!("{}-{}", prefix, field.name());
            let value = move || form.with(|f| f.get(field).to_string());
            let on_input = move |ev: Event| {
                form.update(|f| f.set(field, event_target_value(&ev)));
            };

            let input = if field.is_multiline() {
                view! {
                    <textarea
                        id=id.clone()
                        name=field.name()
                        rows="4"
                        required=field.is_required()
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        type="text"
                        id=id.clone()
                        name=field.name()
                        required=field.is_required()
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any()
            };

            view! {
                <div class="form-group">
                    <label for=id>{field.label()}</label>
                    {input}
                </div>
            }
        })
        .collect_view()
}

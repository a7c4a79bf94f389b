//! 削除リスト

use crate::app::use_admin;
use crate::browser::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{summary_line, FormController, DELETE_CONFIRM_PROMPT};

#[component]
pub fn DeleteList() -> impl IntoView {
    let ctx = use_admin();
    let deleting = RwSignal::new(None::<usize>);

    let delete = move |index: usize| {
        deleting.set(Some(index));
        spawn_local(async move {
            let service = ctx.service();
            let controller = FormController::new(&service);
            if let Ok(true) = controller
                .confirm_delete(index, || confirm(DELETE_CONFIRM_PROMPT))
                .await
            {
                ctx.reload();
            }
            deleting.set(None);
        });
    };

    let items = move || {
        ctx.projects.with(|collection| {
            collection
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    view! {
                        <li class="delete-item">
                            <div>
                                <strong>{record.title.clone()}</strong>
                                <div class="text-muted">{summary_line(record)}</div>
                            </div>
                            <button
                                type="button"
                                class="btn btn-danger btn-small"
                                disabled=move || deleting.get() == Some(index)
                                on:click=move |_| delete(index)
                            >
                                "Delete"
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="admin-form">
            <h2>"Delete Project"</h2>
            <ul class="delete-list">{items}</ul>
        </section>
    }
}

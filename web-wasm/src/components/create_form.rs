//! 作成フォーム

use crate::app::use_admin;
use crate::components::project_fields::ProjectFields;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{FormController, ProjectForm};

#[component]
pub fn CreateForm() -> impl IntoView {
    let ctx = use_admin();
    let form = RwSignal::new(ProjectForm::default());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let values = form.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            let service = ctx.service();
            let controller = FormController::new(&service);
            if controller.submit_create(&values).await.is_ok() {
                form.set(ProjectForm::default());
                ctx.reload();
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <h2>"Create Project"</h2>
            <ProjectFields form=form prefix="create" />
            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Create Project" }}
            </button>
        </form>
    }
}

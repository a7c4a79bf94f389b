//! ショーケース（読み取り専用の表示）
//!
//! ローカルデータ、またはリモートドキュメントを表示する。
//! リモートが失敗したら同梱の`projects-data.json`を表示する。

use crate::app::use_admin;
use crate::browser::{BrowserStorage, FetchTransport};
use crate::components::project_grid::ProjectGrid;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::showcase::FALLBACK_DOCUMENT;
use portfolio_common::{
    load_local_showcase, load_remote_showcase, CardListState, LocalStore, RemoteConfig,
    RemoteStore, Result, Showcase, Status,
};

#[component]
pub fn ShowcasePanel() -> impl IntoView {
    let ctx = use_admin();
    let cards = RwSignal::new(CardListState::Ready(Vec::new()));
    let source = RwSignal::new(None::<&'static str>);
    let (loading, set_loading) = signal(false);

    let show = move |result: Result<Showcase>| match result {
        Ok(showcase) => {
            source.set(Some(showcase.source.as_str()));
            cards.set(CardListState::from_records(&showcase.projects));
        }
        Err(e) => {
            source.set(None);
            cards.set(CardListState::Ready(Vec::new()));
            ctx.show_status(Status::error(format!("Unable to load data: {}", e)));
        }
    };

    let on_load_local = move |_| {
        show(load_local_showcase(&LocalStore::new(BrowserStorage)));
    };

    let on_load_remote = move |_| {
        set_loading.set(true);
        cards.set(CardListState::Loading);
        let remote = RemoteStore::new(ctx.remote_config(), FetchTransport);
        spawn_local(async move {
            let fallback = RemoteStore::new(RemoteConfig::public(FALLBACK_DOCUMENT), FetchTransport);
            show(load_remote_showcase(&remote, &fallback).await);
            set_loading.set(false);
        });
    };

    view! {
        <section class="showcase">
            <h2>"Showcase"</h2>
            <div class="api-actions">
                <button type="button" class="btn btn-secondary" on:click=on_load_local>
                    "Load Local"
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || loading.get()
                    on:click=on_load_remote
                >
                    "Load Remote"
                </button>
            </div>
            {move || source.get().map(|source| view! { <p class="text-muted">"Loaded from " {source}</p> })}
            <ProjectGrid cards=cards />
        </section>
    }
}

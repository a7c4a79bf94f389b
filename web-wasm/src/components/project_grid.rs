//! カード一覧

use crate::components::project_card::{ProjectCard, SkeletonCard};
use leptos::prelude::*;
use portfolio_common::render::{EMPTY_LIST_MESSAGE, SKELETON_COUNT};
use portfolio_common::CardListState;

/// 状態が変わるたびに一覧全体を描き直す
#[component]
pub fn ProjectGrid(cards: RwSignal<CardListState>) -> impl IntoView {
    let body = move || match cards.get() {
        CardListState::Loading => (0..SKELETON_COUNT)
            .map(|_| view! { <SkeletonCard /> })
            .collect_view()
            .into_any(),
        CardListState::Ready(cards) if cards.is_empty() => {
            view! { <p class="text-muted">{EMPTY_LIST_MESSAGE}</p> }.into_any()
        }
        CardListState::Ready(cards) => cards
            .into_iter()
            .map(|card| view! { <ProjectCard card=card /> })
            .collect_view()
            .into_any(),
    };

    view! { <div class="project-grid">{body}</div> }
}

//! プロジェクトカード

use leptos::prelude::*;
use portfolio_common::render::{IMAGE_WIDTH, MOBILE_MEDIA};
use portfolio_common::CardModel;

#[component]
pub fn ProjectCard(card: CardModel) -> impl IntoView {
    let CardModel {
        title,
        picture,
        description,
        link,
        tags,
        date,
        meta,
    } = card;

    let mobile_source = picture
        .mobile_src
        .map(|src| view! { <source srcset=src media=MOBILE_MEDIA /> });
    let tags = (!tags.is_empty()).then(|| {
        view! {
            <div class="tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
        }
    });

    view! {
        <article class="project-card">
            {date.map(|date| view! { <time datetime=date.clone() class="date">{date.clone()}</time> })}
            <h2>{title}</h2>
            <picture>
                {mobile_source}
                <img src=picture.src alt=picture.alt width=IMAGE_WIDTH.to_string() />
            </picture>
            {tags}
            <p>{description}</p>
            {link.map(|link| {
                view! {
                    <a href=link.href target="_blank" rel="noopener noreferrer" class="cta-link">
                        {link.label}
                    </a>
                }
            })}
            {meta.map(|meta| view! { <p class="meta">{meta}</p> })}
        </article>
    }
}

/// 読み込み中の仮カード
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! { <div class="skeleton-card" aria-hidden="true"></div> }
}

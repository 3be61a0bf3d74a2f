//! Card for a single Batmobile in the gallery grid.

use leptos::prelude::*;

use crate::net::types::Batmobile;

/// A clickable gallery card. Clicking it opens the detail overlay via the
/// `on_select` callback.
#[component]
pub fn BatmobileCard(batmobile: Batmobile, on_select: Callback<Batmobile>) -> impl IntoView {
    let selected = batmobile.clone();
    let placeholder = batmobile
        .title
        .clone()
        .unwrap_or_else(|| batmobile.name.clone());
    let meta = format!("{} \u{2022} {}", batmobile.universe, batmobile.media);

    view! {
        <div class="batmobile-card" on:click=move |_| on_select.run(selected.clone())>
            <div class="batmobile-card__media">
                {match batmobile.image_url {
                    Some(url) => view! { <img src=url alt=batmobile.name.clone()/> }.into_any(),
                    None => {
                        view! { <span class="batmobile-card__placeholder">{placeholder}</span> }
                            .into_any()
                    }
                }}
            </div>
            <div class="batmobile-card__body">
                <div class="batmobile-card__row">
                    <h3 class="batmobile-card__name">{batmobile.name}</h3>
                    {batmobile
                        .year
                        .map(|y| view! { <span class="batmobile-card__year">{y}</span> })}
                </div>
                <p class="batmobile-card__meta">{meta}</p>
                {batmobile
                    .description
                    .map(|d| view! { <p class="batmobile-card__description">{d}</p> })}
            </div>
        </div>
    }
}

//! Detail overlay for a selected Batmobile.

use leptos::prelude::*;

use crate::net::types::Batmobile;

/// Full-detail overlay. Clicking the backdrop or the close control runs
/// `on_close`; clicks inside the dialog do not propagate to the backdrop.
#[component]
pub fn BatmobileModal(batmobile: Batmobile, on_close: Callback<()>) -> impl IntoView {
    let year = batmobile
        .year
        .map_or_else(|| "\u{2014}".to_owned(), |y| y.to_string());
    let specs = batmobile.specs.clone();

    view! {
        <div class="batmobile-modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="batmobile-modal" on:click=move |ev| ev.stop_propagation()>
                <button class="batmobile-modal__close" on:click=move |_| on_close.run(())>
                    "\u{00d7}"
                </button>
                {batmobile
                    .image_url
                    .map(|url| {
                        view! {
                            <img class="batmobile-modal__image" src=url alt=batmobile.name.clone()/>
                        }
                    })}
                <h3 class="batmobile-modal__name">{batmobile.name}</h3>
                {batmobile
                    .title
                    .map(|t| view! { <p class="batmobile-modal__title">{t}</p> })}
                <dl class="batmobile-modal__facts">
                    <dt>"Year"</dt>
                    <dd>{year}</dd>
                    <dt>"Universe"</dt>
                    <dd>{batmobile.universe}</dd>
                    <dt>"Media"</dt>
                    <dd>{batmobile.media}</dd>
                </dl>
                {batmobile
                    .description
                    .map(|d| view! { <p class="batmobile-modal__description">{d}</p> })}
                {(!specs.is_empty())
                    .then(|| {
                        view! {
                            <ul class="batmobile-modal__specs">
                                {specs
                                    .into_iter()
                                    .map(|s| view! { <li>{s}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })}
            </div>
        </div>
    }
}

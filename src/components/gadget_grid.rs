//! Gadget grid panel: fetch on mount, explicit refresh, and the sample-data
//! seed flow with its transient confirmation message.

use leptos::prelude::*;

use crate::components::gadget_card::GadgetCard;
use crate::net::api::ApiClient;
use crate::state::gadgets::GadgetsState;
#[cfg(feature = "hydrate")]
use crate::state::gadgets::MESSAGE_TTL_SECS;

/// Fetch the gadget list and replace the panel contents wholesale. A failed
/// fetch is logged and leaves the current list in place.
fn load(api: &ApiClient, gadgets: RwSignal<GadgetsState>) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        gadgets.update(GadgetsState::begin_load);
        leptos::task::spawn_local(async move {
            let fetched = match api.fetch_gadgets().await {
                Ok(items) => Some(items),
                Err(e) => {
                    log::error!("gadget fetch failed: {e}");
                    None
                }
            };
            let _ = gadgets.try_update(|g| g.finish_load(fetched));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, gadgets);
    }
}

/// Ask the server to insert sample gadgets, then re-fetch the list.
/// A second call while one is in flight is a no-op.
fn seed(api: &ApiClient, gadgets: RwSignal<GadgetsState>) {
    #[cfg(feature = "hydrate")]
    {
        let started = gadgets.try_update(GadgetsState::begin_seed).unwrap_or(false);
        if !started {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let inserted = match api.seed_gadgets().await {
                Ok(outcome) => Some(outcome.inserted),
                Err(e) => {
                    log::error!("gadget seed failed: {e}");
                    None
                }
            };
            let succeeded = inserted.is_some();
            let Some(epoch) = gadgets.try_update(|g| g.finish_seed(inserted)) else {
                return;
            };
            if succeeded {
                load(&api, gadgets);
            }
            // The message is transient. A clear firing after teardown is
            // dropped by `try_update`; one outlived by a newer message is
            // dropped by the epoch check.
            gloo_timers::future::sleep(std::time::Duration::from_secs(MESSAGE_TTL_SECS)).await;
            let _ = gadgets.try_update(|g| g.clear_message(epoch));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, gadgets);
    }
}

/// Gadget section: header with refresh/seed actions, then loading, empty
/// prompt, or the card grid.
#[component]
pub fn GadgetGrid() -> impl IntoView {
    let gadgets = expect_context::<RwSignal<GadgetsState>>();
    let api = expect_context::<ApiClient>();

    // Initial fetch. Effects only run in the browser, so SSR output stays
    // in the loading state until hydration.
    {
        let api = api.clone();
        Effect::new(move || load(&api, gadgets));
    }

    let on_refresh = {
        let api = api.clone();
        move |_| load(&api, gadgets)
    };
    let on_seed = move |_| seed(&api, gadgets);

    view! {
        <section id="gadgets" class="gadget-grid">
            <div class="gadget-grid__inner">
                <header class="gadget-grid__header">
                    <div>
                        <h2>"Gadgets"</h2>
                        <p class="gadget-grid__tagline">"Essential tools of the Caped Crusader."</p>
                    </div>
                    <div class="gadget-grid__actions">
                        <button class="btn" on:click=on_refresh>
                            "Refresh"
                        </button>
                        <button
                            class="btn btn--primary"
                            disabled=move || gadgets.get().seeding
                            on:click=on_seed
                        >
                            {move || if gadgets.get().seeding { "Seeding..." } else { "Seed sample gadgets" }}
                        </button>
                    </div>
                </header>

                {move || {
                    gadgets
                        .get()
                        .message
                        .map(|m| view! { <p class="gadget-grid__message">{m}</p> })
                }}

                {move || {
                    let state = gadgets.get();
                    if state.loading {
                        view! { <p class="gadget-grid__loading">"Loading gadgets..."</p> }.into_any()
                    } else if state.is_empty_idle() {
                        view! {
                            <div class="gadget-grid__empty">
                                <p>"The armory is empty."</p>
                                <p>"Use the seed button above to stock it with sample gadgets."</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="gadget-grid__cards">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|g| view! { <GadgetCard gadget=g/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

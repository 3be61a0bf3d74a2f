//! Batmobile gallery: universe filter chips, free-text search, sort control,
//! the derived card grid, and the detail overlay.

use leptos::prelude::*;

use crate::components::batmobile_card::BatmobileCard;
use crate::components::batmobile_modal::BatmobileModal;
use crate::net::api::ApiClient;
use crate::net::types::Batmobile;
use crate::state::gallery::{GalleryState, SortKey, UniverseFilter};

/// Fetch the Batmobile list once. A failed fetch is logged and leaves the
/// list unchanged.
fn load(api: &ApiClient, gallery: RwSignal<GalleryState>) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let fetched = match api.fetch_batmobiles().await {
                Ok(items) => Some(items),
                Err(e) => {
                    log::error!("batmobile fetch failed: {e}");
                    None
                }
            };
            let _ = gallery.try_update(|g| g.finish_load(fetched));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, gallery);
    }
}

/// Batmobile section. The displayed grid is a memoized pure derivation of
/// (items, filter, query, sort); the controls only write state.
#[component]
pub fn BatmobileGallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let api = expect_context::<ApiClient>();

    Effect::new(move || load(&api, gallery));

    let derived = Memo::new(move |_| gallery.get().derived());

    let on_select = Callback::new(move |b: Batmobile| gallery.update(|g| g.select(b)));
    let on_close = Callback::new(move |()| gallery.update(GalleryState::deselect));

    view! {
        <section id="batmobiles" class="batmobile-gallery">
            <div class="batmobile-gallery__inner">
                <header class="batmobile-gallery__header">
                    <div>
                        <h2>"Batmobiles"</h2>
                        <p class="batmobile-gallery__tagline">
                            "Every iconic ride from across continuities."
                        </p>
                    </div>
                    <div class="batmobile-gallery__chips">
                        {UniverseFilter::CHIPS
                            .into_iter()
                            .map(|f| {
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--active=move || gallery.get().filter == f
                                        on:click=move |_| gallery.update(|g| g.set_filter(f))
                                    >
                                        {f.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </header>

                <div class="batmobile-gallery__controls">
                    <input
                        class="batmobile-gallery__search"
                        type="search"
                        placeholder="Search by name, title, or era..."
                        prop:value=move || gallery.get().query
                        on:input=move |ev| {
                            gallery.update(|g| g.set_query(event_target_value(&ev)));
                        }
                    />
                    <select
                        class="batmobile-gallery__sort"
                        prop:value=move || gallery.get().sort.as_str()
                        on:change=move |ev| {
                            if let Some(key) = SortKey::parse(&event_target_value(&ev)) {
                                gallery.update(|g| g.set_sort(key));
                            }
                        }
                    >
                        <option value="year-desc">"Year (newest first)"</option>
                        <option value="year-asc">"Year (oldest first)"</option>
                        <option value="name-asc">"Name (A\u{2013}Z)"</option>
                    </select>
                </div>

                {move || {
                    if gallery.get().loading {
                        view! {
                            <p class="batmobile-gallery__loading">"Loading batmobiles..."</p>
                        }
                            .into_any()
                    } else {
                        let view_items = derived.get();
                        if view_items.is_empty() {
                            view! {
                                <p class="batmobile-gallery__empty">
                                    "No Batmobiles match the current filters."
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="batmobile-gallery__cards">
                                    {view_items
                                        .into_iter()
                                        .map(|b| {
                                            view! { <BatmobileCard batmobile=b on_select=on_select/> }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>

            {move || {
                gallery
                    .get()
                    .selected
                    .map(|b| view! { <BatmobileModal batmobile=b on_close=on_close/> })
            }}
        </section>
    }
}

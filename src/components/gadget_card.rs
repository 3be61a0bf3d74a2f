//! Card for a single gadget in the grid.

use leptos::prelude::*;

use crate::net::types::Gadget;

/// A gadget card: image (or name placeholder), name, category, description.
#[component]
pub fn GadgetCard(gadget: Gadget) -> impl IntoView {
    let placeholder = gadget.name.clone();

    view! {
        <div class="gadget-card">
            <div class="gadget-card__media">
                {match gadget.image_url {
                    Some(url) => view! { <img src=url alt=gadget.name.clone()/> }.into_any(),
                    None => view! { <span class="gadget-card__placeholder">{placeholder}</span> }.into_any(),
                }}
            </div>
            <div class="gadget-card__body">
                <h3 class="gadget-card__name">{gadget.name}</h3>
                <p class="gadget-card__category">{gadget.category}</p>
                <p class="gadget-card__description">{gadget.description}</p>
            </div>
        </div>
    }
}

//! Static hero banner with anchor links into the two galleries.
//!
//! The animated 3D scene lives outside this crate; the banner only carries
//! the title, tagline, and section links.

use leptos::prelude::*;

/// Hero banner at the top of the page.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">"The Batcave"</h1>
                <p class="hero__tagline">
                    "Gadgets and Batmobiles from every corner of the DC multiverse."
                </p>
                <nav class="hero__links">
                    <a class="btn btn--primary" href="#gadgets">
                        "Explore Gadgets"
                    </a>
                    <a class="btn" href="#batmobiles">
                        "View Batmobiles"
                    </a>
                </nav>
            </div>
        </header>
    }
}

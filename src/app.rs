//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::batmobile_gallery::BatmobileGallery;
use crate::components::gadget_grid::GadgetGrid;
use crate::components::hero::Hero;
use crate::net::api::ApiClient;
use crate::state::{gadgets::GadgetsState, gallery::GalleryState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and per-panel state contexts, then lays out
/// hero, gadget grid, Batmobile gallery, and footer. The two panels share
/// no state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gadgets = RwSignal::new(GadgetsState::default());
    let gallery = RwSignal::new(GalleryState::default());

    provide_context(ApiClient::from_env());
    provide_context(gadgets);
    provide_context(gallery);

    view! {
        <Stylesheet id="leptos" href="/pkg/batcave-ui.css"/>
        <Title text="The Batcave"/>

        <div class="site">
            <Hero/>
            <main class="site__main">
                <GadgetGrid/>
                <BatmobileGallery/>
                <footer class="site__footer">
                    <p>
                        "Fan project. Batman and related characters are trademarks of DC Comics and Warner Bros."
                    </p>
                </footer>
            </main>
        </div>
    }
}

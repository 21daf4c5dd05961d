use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::detail::LightboxOverlay;
use ui::views::{Overview, PaperDetail};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Overview {},
    #[route("/paper/:id")]
    PaperDetail { id: String },
    // Unrecognized paths fall back to the overview.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Overview {},
        "{label}"
    })
}

fn nav_paper(id: &str, class: &'static str, children: Element) -> Element {
    rsx!(Link {
        class: class,
        to: Route::PaperDetail { id: id.to_string() },
        {children}
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register the platform link builders so shared components can
        // navigate without knowing this crate's Route enum.
        register_nav(NavBuilder {
            overview: nav_overview,
            paper: nav_paper,
        });
    }

    // Global reactive language code; AppNavbar updates it on selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Shared catalog store: dataset fetch, filters, lightbox, image probe.
    ui::store::use_store_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific shell around the shared navbar and lightbox overlay
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
        LightboxOverlay { }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        Overview {}
    }
}

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::detail::LightboxOverlay;
use ui::views::{Overview, PaperDetail};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Overview {},
    #[route("/paper/:id")]
    PaperDetail { id: String },
    // Unrecognized paths fall back to the overview.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Chipdex – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[cfg(all(not(feature = "server"), not(feature = "desktop")))]
fn main() {
    eprintln!("chipdex-desktop was built without the `desktop` feature");
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Overview {}, "{label}" })
}

fn nav_paper(id: &str, class: &'static str, children: Element) -> Element {
    rsx!(Link { class: class, to: Route::PaperDetail { id: id.to_string() }, {children} })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Provide the global reactive language code signal (mirrors the web
    // approach); AppNavbar updates it via context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register localized navigation builders (desktop)
    register_nav(NavBuilder {
        overview: nav_overview,
        paper: nav_paper,
    });

    // Shared catalog store: dataset fetch, filters, lightbox, image probe.
    ui::store::use_store_provider();

    // Runtime maximize fallback (in case the initial builder maximize is
    // ignored by the WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline the embedded CSS (no external file dependency for
        // desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Key the routed subtree by current language to force a full
        // remount on change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific shell around the shared navbar and lightbox overlay
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopShell() -> Element {
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

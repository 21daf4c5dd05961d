use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (shared by web and desktop shells)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// - `overview` builds the navbar link to the overview page and receives
///   the localized label.
/// - `paper` builds a link to one paper's detail route; it is used by the
///   comparison table rows, the detail sidebar and the prev/next
///   navigation, so it takes the target id, a CSS class and pre-rendered
///   children.
///
/// If no builder is registered (tests, previews), links degrade to plain
/// fragment anchors.
pub struct NavBuilder {
    pub overview: fn(label: &str) -> Element,
    pub paper: fn(id: &str, class: &'static str, children: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to a paper's detail route via the registered builder.
pub fn paper_link(id: &str, class: &'static str, children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.paper)(id, class, children),
        None => rsx! {
            a { class: class, href: "#paper/{id}", {children} }
        },
    }
}

/// Link back to the overview via the registered builder.
pub fn overview_link(class: &'static str, label: String) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.overview)(&label),
        None => rsx! {
            a { class: class, href: "#overview", "{label}" }
        },
    }
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain the global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] AppNavbar render lang={}", code());
        }
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            // Propagate to the global language code signal if present.
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let overview_nav = NAV_BUILDER.get().map(|b| (b.overview)(&t!("nav-overview")));
    let tagline = t!("tagline");

    rsx! {
        // Include the navbar stylesheet (and inline it in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures AppNavbar re-renders when the global
            // language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "Chipdex" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(overview_link) = overview_nav {
                    nav { class: "navbar__links", {overview_link} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::core::paper::Figure;
use crate::t;

/// Redacted figure gallery for public builds: figure numbers and captions
/// only, never image bytes, regardless of what the dataset references.
#[component]
pub fn RedactedGallery(figures: Vec<Figure>) -> Element {
    if figures.is_empty() {
        return rsx! {};
    }

    let cards = figures.into_iter().map(|fig| {
        let label = format!("Fig. {}", fig.num);
        rsx! {
            div { class: "figure-card figure-card--redacted",
                div { class: "figure-placeholder", "{label}" }
                div { class: "figure-label", "{label}" }
                if let Some(caption) = fig.caption.as_ref() {
                    div { class: "figure-caption", "{caption}" }
                }
            }
        }
    });

    rsx! {
        h2 { class: "section-heading", {t!("figures-heading")} }
        div { class: "figure-gallery", {cards} }
    }
}

use dioxus::prelude::*;

use crate::core::format::idea_type_class;
use crate::core::paper::{Challenge, Idea};
use crate::t;

/// Connector label for a challenge's declared related idea. The index is
/// author data and is resolved defensively: absent or out-of-range
/// references yield an empty label, never an error.
pub fn connector_label(challenge: &Challenge, idea_count: usize) -> String {
    challenge
        .related_idea_idx
        .filter(|idx| *idx < idea_count)
        .map(|idx| format!("I{}", idx + 1))
        .unwrap_or_default()
}

/// Paired challenge → idea diagram: two parallel columns padded to equal
/// length, with a middle connector column of annotated arrows. A visual
/// alignment aid, not a validated graph.
#[component]
pub fn ChallengeIdea(challenges: Vec<Challenge>, ideas: Vec<Idea>) -> Element {
    if challenges.is_empty() && ideas.is_empty() {
        return rsx! {};
    }
    let rows = challenges.len().max(ideas.len());
    let idea_count = ideas.len();

    rsx! {
        h2 { class: "section-heading", {t!("challenge-idea-heading")} }
        div { class: "challenge-idea-section",
            div { class: "challenge-column",
                for i in 0..rows {
                    match challenges.get(i) {
                        Some(challenge) => {
                            let index_label = format!("C{}", i + 1);
                            rsx! {
                                div { class: "challenge-card",
                                    span { class: "card-index", "{index_label}" }
                                    div { class: "card-text-zh", "{challenge.text}" }
                                    if let Some(text_en) = challenge.text_en.as_ref() {
                                        div { class: "card-text-en", "{text_en}" }
                                    }
                                }
                            }
                        }
                        None => rsx! { div { class: "card-spacer" } },
                    }
                }
            }

            div { class: "connector-column",
                for i in 0..rows {
                    match challenges.get(i) {
                        Some(challenge) => {
                            let target = connector_label(challenge, idea_count);
                            let tooltip = format!("C{} \u{2192} {target}", i + 1);
                            rsx! {
                                div { class: "connector-arrow", title: "{tooltip}", "\u{2192}" }
                            }
                        }
                        None => rsx! { div { class: "connector-arrow", "\u{00A0}" } },
                    }
                }
            }

            div { class: "idea-column",
                for i in 0..rows {
                    match ideas.get(i) {
                        Some(idea) => {
                            let index_label = format!("I{}", i + 1);
                            rsx! {
                                div {
                                    class: format!("idea-card {}", idea_type_class(idea.kind.as_deref())),
                                    span { class: "card-index", "{index_label}" }
                                    div { class: "card-text-zh", "{idea.text}" }
                                    if let Some(text_en) = idea.text_en.as_ref() {
                                        div { class: "card-text-en", "{text_en}" }
                                    }
                                }
                            }
                        }
                        None => rsx! { div { class: "card-spacer" } },
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::app_navbar::overview_link;
use crate::core::format::innovation_class;
use crate::core::net;
use crate::detail::{
    BottomNav, ChallengeIdea, DetailNav, DetailSidebar, MetaCards, PaperReader, RedactedGallery,
};
use crate::store::{self, CatalogLoad};
use crate::t;

/// One paper's detail page. In private builds the full [`PaperReader`] is
/// mounted; public builds get the redacted caption-only gallery instead —
/// the mode is a presentation gate, and the fetch layer refuses restricted
/// content independently.
#[component]
pub fn PaperDetail(id: String) -> Element {
    let _lang = try_use_context::<Signal<String>>()
        .as_ref()
        .map(|s| s())
        .unwrap_or_default();

    let catalog = store::use_catalog();

    let body = match &*catalog.read() {
        CatalogLoad::Loading => rsx! {
            div { class: "loading",
                div { class: "loading-spinner" }
                div { {t!("overview-loading")} }
            }
        },
        CatalogLoad::Failed(reason) => rsx! {
            div { class: "empty-state",
                p { {t!("overview-load-failed")} }
                p { class: "empty-state__reason", "{reason}" }
            }
        },
        CatalogLoad::Ready(papers) => match store::find_paper(papers, &id) {
            None => rsx! {
                div { class: "detail-layout",
                    div { class: "detail-page",
                        div { class: "detail-nav",
                            {overview_link("back-link", t!("back-to-overview"))}
                        }
                        div { class: "empty-state",
                            p { {t!("paper-not-found", id = id.clone())} }
                        }
                    }
                }
            },
            Some(paper) => {
                let paper = paper.clone();
                let (prev, next) = store::adjacent_ids(papers, &id);
                let sidebar_papers = papers.clone();

                let logo = paper
                    .affiliation_info
                    .as_ref()
                    .and_then(|info| info.logo.as_deref())
                    .map(net::asset_url);

                rsx! {
                    div { class: "detail-layout",
                        DetailSidebar { papers: sidebar_papers, active_id: id.clone() }
                        div { class: "detail-page",
                            DetailNav { prev: prev.clone(), next: next.clone() }

                            h1 { class: "detail-title", "{paper.title}" }
                            if let Some(title_zh) = paper.title_zh.as_ref() {
                                div { class: "detail-title-zh", "{title_zh}" }
                            }

                            if let Some(abstract_text) = paper.abstract_text.as_ref() {
                                div { class: "abstract-section",
                                    h2 { class: "section-heading", {t!("abstract-heading")} }
                                    p { class: "abstract-text", "{abstract_text}" }
                                }
                            }

                            {title_annotation(&paper)}

                            MetaCards { paper: paper.clone(), logo }

                            ChallengeIdea {
                                challenges: paper.challenges.clone(),
                                ideas: paper.ideas.clone(),
                            }

                            {innovation_pills(&paper)}
                            {tag_section(&paper)}

                            if net::full_content_enabled() {
                                // Only mounted when some figure is actually
                                // renderable; keyed by paper id so navigating
                                // to another paper remounts the reader and
                                // issues a fresh text fetch.
                                if paper.figures.iter().any(|f| f.path.is_some()) {
                                    PaperReader { key: "{paper.id}", paper: paper.clone() }
                                }
                            } else {
                                RedactedGallery { figures: paper.figures.clone() }
                            }

                            BottomNav { prev, next }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "page page-detail", {body} }
    }
}

fn title_annotation(paper: &crate::core::paper::Paper) -> Element {
    let segments = paper
        .title_annotation
        .as_ref()
        .map(|a| a.segments.clone())
        .unwrap_or_default();
    if segments.is_empty() {
        return rsx! {};
    }
    rsx! {
        h2 { class: "section-heading", {t!("gloss-heading")} }
        div { class: "title-annotated",
            for seg in segments {
                span {
                    class: "segment",
                    style: format!(
                        "--seg-color:{}",
                        seg.color.as_deref().unwrap_or("var(--accent)")
                    ),
                    span { class: "segment__original", "{seg.text}" }
                    if let Some(meaning) = seg.meaning.as_ref() {
                        span { class: "segment__annotation", "{meaning}" }
                    }
                }
            }
        }
    }
}

fn innovation_pills(paper: &crate::core::paper::Paper) -> Element {
    if paper.innovations.is_empty() {
        return rsx! {};
    }
    rsx! {
        h2 { class: "section-heading", {t!("innovations-heading")} }
        div { class: "innovations-grid",
            for inn in paper.innovations.clone() {
                span {
                    class: format!("innovation-pill {}", innovation_class(inn.kind.as_deref())),
                    "{inn.tag}"
                }
            }
        }
    }
}

fn tag_section(paper: &crate::core::paper::Paper) -> Element {
    if paper.analytical_tags.is_empty() && paper.tags.is_empty() {
        return rsx! {};
    }
    rsx! {
        h2 { class: "section-heading", {t!("tags-heading")} }
        if !paper.analytical_tags.is_empty() {
            div { class: "tags-grid tags-grid--analytical",
                for tag in paper.analytical_tags.clone() {
                    span { class: "tag-pill tag-analytical", "{tag}" }
                }
            }
        }
        if !paper.tags.is_empty() {
            div { class: "tags-grid",
                for tag in paper.tags.clone() {
                    span { class: "tag-pill tag-neutral", "{tag}" }
                }
            }
        }
    }
}

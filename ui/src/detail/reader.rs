use dioxus::events::Key;
use dioxus::prelude::*;

use crate::core::images::resolve_image_path;
use crate::core::net;
use crate::core::paper::{Figure, Paper};
use crate::core::reader::{caption_slides, fulltext_paragraphs, paired_slides, ReaderMode, Slide};
use crate::store;
use crate::t;

/// The multi-mode reader: paired text+figure slides, full text, or a
/// figure gallery. Only mounted in private builds, keyed by paper id so a
/// fresh visit issues a fresh text-document fetch.
#[component]
pub fn PaperReader(paper: Paper) -> Element {
    let image_dir = store::use_image_dir();
    let lightbox = store::use_lightbox();
    let mut mode = use_signal(ReaderMode::default);
    let mut slide_idx = use_signal(|| 0usize);

    let figures: Vec<Figure> = paper
        .figures
        .iter()
        .filter(|f| f.path.is_some())
        .cloned()
        .collect();

    let dir = *image_dir.read();
    let image_for = {
        let figures = figures.clone();
        move |num: u32| -> Option<String> {
            figures
                .iter()
                .find(|f| f.num == num)
                .and_then(|f| f.path.as_deref())
                .map(|path| net::asset_url(&resolve_image_path(path, dir)))
        }
    };

    let paper_id = paper.id.clone();
    let text_doc = use_resource(move || {
        let id = paper_id.clone();
        async move { net::fetch_text_doc(&id).await }
    });

    // Raw markdown is fetched only in full-text mode, and only once the
    // structured document turned out empty or failed.
    let paper_id_md = paper.id.clone();
    let markdown = use_resource(move || {
        let id = paper_id_md.clone();
        let wanted = mode() == ReaderMode::Fulltext;
        let structured_exhausted = match &*text_doc.read() {
            Some(Ok(doc)) => doc.sections.is_empty(),
            Some(Err(_)) => true,
            None => false,
        };
        async move {
            if wanted && structured_exhausted {
                Some(net::fetch_markdown(&id).await)
            } else {
                None
            }
        }
    });

    if figures.is_empty() {
        return rsx! {};
    }

    // Paired slides reflect the current fetch state: None while loading,
    // caption-only reconstruction after a failure.
    let slides: Option<Vec<Slide>> = match &*text_doc.read() {
        None => None,
        Some(Ok(doc)) => Some(paired_slides(&doc.sections, &figures, &image_for)),
        Some(Err(_)) => Some(caption_slides(&figures, &image_for)),
    };

    let body_paragraphs: Option<Vec<String>> = match &*text_doc.read() {
        Some(Ok(doc)) if !doc.sections.is_empty() => Some(fulltext_paragraphs(&doc.sections)),
        _ => None,
    };

    let current_mode = mode();
    let mode_button = |target: ReaderMode, label: String| {
        let active = current_mode == target;
        rsx! {
            button {
                class: format!("reader-mode-btn{}", if active { " active" } else { "" }),
                onclick: move |_| mode.set(target),
                "{label}"
            }
        }
    };

    let content = match current_mode {
        ReaderMode::Paired => paired_view(slides.as_deref(), slide_idx, lightbox),
        ReaderMode::Fulltext => fulltext_view(
            text_doc.read().is_none(),
            body_paragraphs.as_deref(),
            markdown().flatten(),
        ),
        ReaderMode::Gallery => gallery_view(&figures, &image_for, lightbox),
    };

    let slide_count = slides.as_ref().map(|s| s.len()).unwrap_or(0);
    let show_nav = current_mode == ReaderMode::Paired && slide_count > 0;

    rsx! {
        div {
            class: "reader-container",
            tabindex: "0",
            onkeydown: move |evt| {
                if mode() != ReaderMode::Paired || slide_count == 0 {
                    return;
                }
                match evt.key() {
                    Key::ArrowLeft => {
                        slide_idx.set((slide_idx() + slide_count - 1) % slide_count)
                    }
                    Key::ArrowRight => slide_idx.set((slide_idx() + 1) % slide_count),
                    _ => {}
                }
            },

            div { class: "reader-modes",
                {mode_button(ReaderMode::Paired, t!("reader-mode-paired"))}
                {mode_button(ReaderMode::Fulltext, t!("reader-mode-fulltext"))}
                {mode_button(ReaderMode::Gallery, t!("reader-mode-gallery"))}
            }

            div { class: "reader-content", {content} }

            if show_nav {
                div { class: "reader-nav",
                    button {
                        class: "reader-nav-btn",
                        onclick: move |_| {
                            slide_idx.set((slide_idx() + slide_count - 1) % slide_count)
                        },
                        "\u{2190}"
                    }
                    div { class: "reader-dots",
                        for i in 0..slide_count {
                            span {
                                class: format!(
                                    "reader-dot{}",
                                    if i == slide_idx().min(slide_count - 1) { " active" } else { "" }
                                ),
                                onclick: move |_| slide_idx.set(i),
                            }
                        }
                    }
                    button {
                        class: "reader-nav-btn",
                        onclick: move |_| slide_idx.set((slide_idx() + 1) % slide_count),
                        "\u{2192}"
                    }
                }
            }
        }
    }
}

fn paired_view(
    slides: Option<&[Slide]>,
    slide_idx: Signal<usize>,
    mut lightbox: Signal<crate::core::lightbox::LightboxState>,
) -> Element {
    let Some(slides) = slides else {
        return rsx! {
            div { class: "loading",
                div { class: "loading-spinner" }
                div { {t!("reader-loading")} }
            }
        };
    };
    if slides.is_empty() {
        return rsx! {
            div { class: "reader-empty", {t!("reader-empty")} }
        };
    }

    let idx = slide_idx().min(slides.len() - 1);
    let slide = &slides[idx];
    let paragraphs: Vec<String> = slide
        .text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    // Lightbox seeding: every slide's image, positioned at the current one.
    let all_images: Vec<String> = slides
        .iter()
        .map(|s| s.image.clone().unwrap_or_default())
        .collect();
    let all_captions: Vec<String> = slides.iter().map(|s| s.label.clone()).collect();
    let open_lightbox = move |_| {
        lightbox
            .write()
            .open(all_images.clone(), idx, all_captions.clone(), Vec::new());
    };

    rsx! {
        div { class: "reader-slide",
            div { class: "reader-figure",
                if let Some(image) = slide.image.as_ref() {
                    img {
                        src: "{image}",
                        alt: "{slide.label}",
                        onclick: open_lightbox,
                    }
                }
            }
            div { class: "reader-text",
                div { class: "reader-text-label", "{slide.label}" }
                for para in paragraphs {
                    p { class: "reader-paragraph", "{para}" }
                }
            }
        }
    }
}

fn fulltext_view(
    loading: bool,
    paragraphs: Option<&[String]>,
    markdown: Option<Result<String, String>>,
) -> Element {
    if loading {
        return loading_fulltext();
    }

    if let Some(paragraphs) = paragraphs {
        return rsx! {
            div { class: "reader-fulltext markdown-content",
                for para in paragraphs.iter().cloned() {
                    p { class: "reader-paragraph", "{para}" }
                }
            }
        };
    }

    match markdown {
        None => loading_fulltext(),
        Some(Ok(md)) => {
            let html = render_markdown(&md);
            rsx! {
                div { class: "reader-fulltext",
                    div { class: "markdown-content", dangerous_inner_html: "{html}" }
                }
            }
        }
        Some(Err(_)) => rsx! {
            div { class: "reader-empty", {t!("reader-fulltext-failed")} }
        },
    }
}

fn loading_fulltext() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "loading-spinner" }
            div { {t!("reader-loading-fulltext")} }
        }
    }
}

fn gallery_view(
    figures: &[Figure],
    image_for: &impl Fn(u32) -> Option<String>,
    mut lightbox: Signal<crate::core::lightbox::LightboxState>,
) -> Element {
    let entries: Vec<(String, String, String)> = figures
        .iter()
        .map(|fig| {
            (
                image_for(fig.num).unwrap_or_default(),
                format!("Fig. {}", fig.num),
                fig.caption.clone().unwrap_or_default(),
            )
        })
        .collect();

    let all_images: Vec<String> = entries.iter().map(|(src, _, _)| src.clone()).collect();
    let all_captions: Vec<String> = entries
        .iter()
        .map(|(_, label, caption)| {
            if caption.is_empty() {
                format!("{label}: ")
            } else {
                format!("{label}: {caption}")
            }
        })
        .collect();

    let cards = entries.into_iter().enumerate().map(move |(i, (src, label, caption))| {
        let images = all_images.clone();
        let captions = all_captions.clone();
        rsx! {
            div {
                class: "figure-card",
                onclick: move |_| {
                    lightbox.write().open(images.clone(), i, captions.clone(), Vec::new());
                },
                img { src: "{src}", alt: "{label}", loading: "lazy" }
                div { class: "figure-label", "{label}" }
                if !caption.is_empty() {
                    div { class: "figure-caption", "{caption}" }
                }
            }
        }
    });

    rsx! {
        div { class: "reader-gallery", {cards} }
    }
}

/// Convert fetched markdown to sanitized HTML for injection.
fn render_markdown(md: &str) -> String {
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, pulldown_cmark::Parser::new(md));
    ammonia::clean(&html)
}

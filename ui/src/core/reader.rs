//! Reader content assembly.
//!
//! The reader pairs structured body text with figures. Slide construction
//! is pure so it can be exercised without a running UI; the component layer
//! only decides *which* of these assemblies to render.

use super::paper::{Figure, TextSection};

/// Presentation mode of the reader. Transitions are user-triggered only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReaderMode {
    #[default]
    Paired,
    Fulltext,
    Gallery,
}

/// One paired-mode slide: a figure with its accompanying prose.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub figure: u32,
    pub image: Option<String>,
    pub label: String,
    pub text: String,
}

fn slide_label(figure: u32) -> String {
    format!("Fig. {figure}")
}

/// Build paired-mode slides from structured sections plus the paper's
/// figures (pre-filtered to those with a resolvable image path).
///
/// Body sections group by their associated figure number, preserving
/// encounter order within a group; each referenced figure yields one slide
/// whose text is the double-newline join of its sections. Figures never
/// referenced by a body section are appended as caption-only slides. The
/// final order is ascending by figure number.
pub fn paired_slides<F>(sections: &[TextSection], figures: &[Figure], image_for: F) -> Vec<Slide>
where
    F: Fn(u32) -> Option<String>,
{
    let mut groups: Vec<(u32, Vec<&str>)> = Vec::new();
    for section in sections {
        let Some(num) = section.figure else { continue };
        if !section.is_body() {
            continue;
        }
        match groups.iter_mut().find(|(n, _)| *n == num) {
            Some((_, texts)) => texts.push(&section.text),
            None => groups.push((num, vec![&section.text])),
        }
    }

    let mut slides: Vec<Slide> = groups
        .into_iter()
        .map(|(figure, texts)| Slide {
            figure,
            image: image_for(figure),
            label: slide_label(figure),
            text: texts.join("\n\n"),
        })
        .collect();

    for fig in figures {
        if !slides.iter().any(|s| s.figure == fig.num) {
            slides.push(Slide {
                figure: fig.num,
                image: image_for(fig.num),
                label: slide_label(fig.num),
                text: fig.caption.clone().unwrap_or_default(),
            });
        }
    }

    slides.sort_by_key(|s| s.figure);
    slides
}

/// Fallback when the structured text document is unavailable: one slide per
/// figure, captioned by the figure's own caption.
pub fn caption_slides<F>(figures: &[Figure], image_for: F) -> Vec<Slide>
where
    F: Fn(u32) -> Option<String>,
{
    figures
        .iter()
        .map(|fig| Slide {
            figure: fig.num,
            image: image_for(fig.num),
            label: slide_label(fig.num),
            text: fig.caption.clone().unwrap_or_default(),
        })
        .collect()
}

/// Full-text mode: every `body` section, in document order.
pub fn fulltext_paragraphs(sections: &[TextSection]) -> Vec<String> {
    sections
        .iter()
        .filter(|s| s.is_body())
        .map(|s| s.text.clone())
        .collect()
}

use dioxus::prelude::*;

use crate::components::app_navbar::{overview_link, paper_link};
use crate::core::format::truncate_chars;
use crate::core::paper::Paper;
use crate::t;

/// Sidebar label length for paper titles.
const SIDEBAR_TITLE_CHARS: usize = 30;

/// Session-grouped list of every paper, with the active one highlighted.
/// Groups appear in encounter order of the collection.
#[component]
pub fn DetailSidebar(papers: Vec<Paper>, active_id: String) -> Element {
    let mut groups: Vec<(String, Vec<Element>)> = Vec::new();
    for paper in &papers {
        let session = paper.session_text().unwrap_or_else(|| "Other".to_string());
        let label = format!(
            "{} {}",
            paper.id,
            truncate_chars(&paper.title, SIDEBAR_TITLE_CHARS)
        );
        let title = paper.title.clone();
        let class = if paper.id == active_id {
            "sidebar-item active"
        } else {
            "sidebar-item"
        };
        let item = paper_link(
            &paper.id,
            class,
            rsx! {
                span { title: "{title}", "{label}" }
            },
        );
        match groups.iter_mut().find(|(s, _)| *s == session) {
            Some((_, items)) => items.push(item),
            None => groups.push((session, vec![item])),
        }
    }

    rsx! {
        aside { class: "detail-sidebar",
            for (session, items) in groups {
                div { class: "sidebar-session",
                    div { class: "sidebar-session-title",
                        {t!("session-tab", num = session.clone())}
                    }
                    {items.into_iter()}
                }
            }
        }
    }
}

fn nav_link(id: &str, class: &'static str, label: String) -> Element {
    paper_link(id, class, rsx! { "{label}" })
}

/// Top navigation: back to the overview plus prev/next by collection order.
#[component]
pub fn DetailNav(prev: Option<String>, next: Option<String>) -> Element {
    let prev_node = match prev {
        Some(id) => nav_link(
            &id,
            "paper-nav__link",
            format!("{} ({id})", t!("prev-paper")),
        ),
        None => rsx! { span { class: "disabled", {t!("prev-paper")} } },
    };
    let next_node = match next {
        Some(id) => nav_link(
            &id,
            "paper-nav__link",
            format!("{} ({id})", t!("next-paper")),
        ),
        None => rsx! { span { class: "disabled", {t!("next-paper")} } },
    };

    rsx! {
        div { class: "detail-nav",
            {overview_link("back-link", t!("back-to-overview"))}
            div { class: "paper-nav",
                {prev_node}
                span { class: "paper-nav__sep", "|" }
                {next_node}
            }
        }
    }
}

/// Compact prev/next strip at the bottom of the page.
#[component]
pub fn BottomNav(prev: Option<String>, next: Option<String>) -> Element {
    let prev_node = match prev {
        Some(id) => nav_link(&id, "bottom-nav__link", format!("\u{2190} {id}")),
        None => rsx! { span { class: "disabled", "\u{2190}" } },
    };
    let next_node = match next {
        Some(id) => nav_link(&id, "bottom-nav__link", format!("{id} \u{2192}")),
        None => rsx! { span { class: "disabled", "\u{2192}" } },
    };

    rsx! {
        div { class: "bottom-nav",
            {prev_node}
            {next_node}
        }
    }
}

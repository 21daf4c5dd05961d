use dioxus::prelude::*;

use crate::store;
use crate::t;

/// Dropdowns, free-text search and the visible-paper count. Options are
/// supplied by the caller from the full collection.
#[component]
pub fn FilterPanel(
    processes: Vec<String>,
    applications: Vec<String>,
    innovation_types: Vec<String>,
    shown: usize,
    total: usize,
) -> Element {
    let mut filters = store::use_filters();
    let state = filters();

    rsx! {
        div { class: "filter-panel",
            select {
                oninput: move |evt| filters.write().process = evt.value(),
                option { value: "", selected: state.process.is_empty(), {t!("filter-all-processes")} }
                for value in processes {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: state.process == value,
                        "{value}"
                    }
                }
            }

            select {
                oninput: move |evt| filters.write().application = evt.value(),
                option { value: "", selected: state.application.is_empty(), {t!("filter-all-applications")} }
                for value in applications {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: state.application == value,
                        "{value}"
                    }
                }
            }

            select {
                oninput: move |evt| filters.write().innovation_type = evt.value(),
                option { value: "", selected: state.innovation_type.is_empty(), {t!("filter-all-innovation-types")} }
                for value in innovation_types {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: state.innovation_type == value,
                        "{value}"
                    }
                }
            }

            input {
                r#type: "text",
                class: "filter-search",
                placeholder: t!("filter-search-placeholder"),
                value: "{state.search}",
                oninput: move |evt| filters.write().search = evt.value(),
            }

            span { class: "paper-count",
                {t!("paper-count", shown = (shown as u64), total = (total as u64))}
            }
        }
    }
}

/// Multi-select toggle bar over the curated analytical tags.
#[component]
pub fn AnalyticalTagBar(tags: Vec<String>) -> Element {
    let mut filters = store::use_filters();
    let selected = filters.read().analytical_tags.clone();

    rsx! {
        div { class: "analytical-tags-filter",
            for tag in tags {
                button {
                    key: "{tag}",
                    class: format!(
                        "analytical-tag-btn{}",
                        if selected.contains(&tag) { " active" } else { "" }
                    ),
                    onclick: {
                        let tag = tag.clone();
                        move |_| filters.write().toggle_analytical_tag(&tag)
                    },
                    "{tag}"
                }
            }
        }
    }
}

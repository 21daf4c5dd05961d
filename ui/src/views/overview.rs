use dioxus::prelude::*;

use crate::core::{filter, stats};
use crate::overview::{
    build_rows, AnalyticalTagBar, ComparisonTable, FilterPanel, SessionTabs, StatsPanel,
};
use crate::store::{self, CatalogLoad};
use crate::t;

/// The overview page: session tabs, filter controls, corpus statistics and
/// the comparison table. Every interaction writes the shared
/// [`crate::core::filter::FilterState`] signal and the whole page
/// re-renders from it — there is no partial update path.
#[component]
pub fn Overview() -> Element {
    // Re-render when the platform's global language code changes.
    let _lang = try_use_context::<Signal<String>>()
        .as_ref()
        .map(|s| s())
        .unwrap_or_default();

    let catalog = store::use_catalog();
    let filters = store::use_filters();

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
        CatalogLoad::Ready(papers) => {
            let current = filters();
            let visible = filter::visible_papers(papers, &current);

            // Filter options always derive from the full collection so
            // active filters never make options disappear.
            let processes = filter::process_options(papers);
            let applications = filter::application_options(papers);
            let innovation_types = filter::innovation_type_options(papers);
            let analytical_tags = filter::analytical_tag_options(papers);

            let node_bars = stats::process_node_histogram(papers);
            let session_bars = stats::session_histogram(papers);
            let org_entries = stats::org_type_distribution(papers);
            let country_entries = stats::country_distribution(papers);

            let shown = visible.len();
            let total = papers.len();
            let rows = build_rows(&visible);

            rsx! {
                SessionTabs {}
                FilterPanel {
                    processes,
                    applications,
                    innovation_types,
                    shown,
                    total,
                }
                AnalyticalTagBar { tags: analytical_tags }
                StatsPanel {
                    node_bars,
                    session_bars,
                    org_entries,
                    country_entries,
                }
                ComparisonTable { rows }
            }
        }
    };

    rsx! {
        section { class: "page page-overview", {body} }
    }
}

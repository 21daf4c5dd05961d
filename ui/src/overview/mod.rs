mod filters;
pub use filters::{AnalyticalTagBar, FilterPanel};

mod stats_panel;
pub use stats_panel::StatsPanel;

mod table;
pub use table::{build_rows, ComparisonTable, TableRow};

use dioxus::prelude::*;

use crate::core::filter::ALL_SESSIONS;
use crate::store;
use crate::t;

/// The fixed session tab list: All + the five program sessions.
pub const SESSION_TABS: [&str; 5] = ["2", "10", "18", "30", "31"];

#[component]
pub fn SessionTabs() -> Element {
    let mut filters = store::use_filters();
    let current = filters.read().session.clone();

    let tab = |key: String, label: String| {
        let active = current == key;
        rsx! {
            div {
                class: format!("session-tab{}", if active { " active" } else { "" }),
                onclick: move |_| filters.write().session = key.clone(),
                "{label}"
            }
        }
    };

    rsx! {
        div { class: "session-tabs",
            {tab(ALL_SESSIONS.to_string(), t!("session-tab-all"))}
            for session in SESSION_TABS {
                {tab(session.to_string(), t!("session-tab", num = session))}
            }
        }
    }
}

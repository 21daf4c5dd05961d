use dioxus::prelude::*;

use crate::core::stats::{donut_segments, BarEntry, DonutEntry};
use crate::t;

/// Corpus statistics: two histogram cards and two donut cards. Always fed
/// from the full collection, never the filtered view.
#[component]
pub fn StatsPanel(
    node_bars: Vec<BarEntry>,
    session_bars: Vec<BarEntry>,
    org_entries: Vec<DonutEntry>,
    country_entries: Vec<DonutEntry>,
) -> Element {
    rsx! {
        div { class: "stats-bar",
            div { class: "stat-card",
                h3 { {t!("stats-process-heading")} }
                {bar_rows(&node_bars)}
            }
            div { class: "stat-card",
                h3 { {t!("stats-session-heading")} }
                {bar_rows(&session_bars)}
            }
            div { class: "stat-card",
                h3 { {t!("stats-org-heading")} }
                {donut_card(&org_entries, org_label)}
            }
            div { class: "stat-card",
                h3 { {t!("stats-country-heading")} }
                {donut_card(&country_entries, |key| key.to_string())}
            }
        }
    }
}

fn org_label(key: &str) -> String {
    match key {
        "academia" => t!("org-academia"),
        "industry" => t!("org-industry"),
        "research_inst" => t!("org-research-inst"),
        "unknown" => t!("org-unknown"),
        other => other.to_string(),
    }
}

fn bar_rows(bars: &[BarEntry]) -> Element {
    rsx! {
        for bar in bars.iter().cloned() {
            div { class: "stat-bar-row",
                span { class: "stat-bar-label", "{bar.label}" }
                div { class: "stat-bar-track",
                    div {
                        class: "stat-bar-fill",
                        style: format!("width:{}%;background:{}", bar.fill_pct, bar.color),
                    }
                }
                span { class: "stat-bar-value", "{bar.count}" }
            }
        }
    }
}

fn donut_card(entries: &[DonutEntry], label: impl Fn(&str) -> String) -> Element {
    let segments = donut_segments(entries);
    rsx! {
        div { class: "pie-chart-container",
            svg { class: "pie-chart", view_box: "0 0 120 120",
                for seg in segments {
                    circle {
                        cx: "60",
                        cy: "60",
                        r: "42",
                        fill: "none",
                        stroke: "{seg.color}",
                        stroke_width: "28",
                        stroke_dasharray: format!("{:.2} {:.2}", seg.length, seg.circumference),
                        stroke_dashoffset: format!("{:.2}", -seg.offset),
                        transform: "rotate(-90 60 60)",
                    }
                }
            }
            div { class: "pie-legend",
                for entry in entries.iter().cloned() {
                    div { class: "pie-legend-item",
                        span {
                            class: "pie-legend-dot",
                            style: format!("background:{}", entry.color),
                        }
                        span { {label(&entry.key)} }
                        span { class: "pie-legend-count", "{entry.count}" }
                    }
                }
            }
        }
    }
}

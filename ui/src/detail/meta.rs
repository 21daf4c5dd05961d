use dioxus::prelude::*;

use crate::core::format::country_flag;
use crate::core::metrics::{self, MetricDisplay};
use crate::core::paper::{Paper, Scalar};
use crate::t;

/// Metric card grid. The detailed layout is used whenever
/// `metrics_detailed` carries any data; otherwise the simple flat layout
/// is built from `metrics`/top-level fields.
#[component]
pub fn MetaCards(paper: Paper, logo: Option<String>) -> Element {
    let detailed = !paper.metrics_detailed.is_empty();
    let cards = if detailed {
        detailed_grid(&paper, logo)
    } else {
        simple_grid(&paper, logo)
    };

    let benchmarks = paper.metrics_detailed.model_benchmarks.clone();

    rsx! {
        div { class: "meta-grid", {cards.into_iter()} }

        if detailed && !benchmarks.is_empty() {
            table { class: "benchmarks-table",
                thead {
                    tr {
                        th { {t!("bench-model")} }
                        th { {t!("bench-metric")} }
                        th { {t!("bench-detail")} }
                    }
                }
                tbody {
                    for bench in benchmarks {
                        tr {
                            td { {bench.model.clone().unwrap_or_default()} }
                            td { {bench.metric.clone().unwrap_or_default()} }
                            td { {bench.detail.clone().unwrap_or_default()} }
                        }
                    }
                }
            }
        }
    }
}

fn text_card(label: String, value: String, highlight: bool) -> Element {
    let class = if highlight {
        "meta-card meta-card-highlight"
    } else {
        "meta-card"
    };
    rsx! {
        div { class: "{class}",
            div { class: "meta-label", "{label}" }
            div { class: "meta-value", "{value}" }
        }
    }
}

fn multi_card(label: String, values: Vec<(String, Option<String>)>, highlight: bool) -> Element {
    let class = if highlight {
        "meta-card meta-card-highlight"
    } else {
        "meta-card"
    };
    rsx! {
        div { class: "{class}",
            div { class: "meta-label", "{label}" }
            div { class: "meta-multi-values",
                for (value, condition) in values {
                    div {
                        span { class: "meta-multi-value", "{value}" }
                        if let Some(condition) = condition {
                            span { class: "meta-condition", " {condition}" }
                        }
                    }
                }
            }
        }
    }
}

fn affiliation_card(paper: &Paper, logo: Option<String>) -> Element {
    let info = paper.affiliation_info.as_ref();
    let name = paper.affiliation.clone().unwrap_or_default();
    let flag = info
        .and_then(|i| i.country_code.as_deref())
        .map(country_flag)
        .unwrap_or_default();
    let badge = info.and_then(|i| i.org_type.as_deref()).map(|org| {
        let label = match org {
            "academia" => t!("org-academia"),
            "industry" => t!("org-industry"),
            "research_inst" => t!("org-research-inst"),
            other => other.to_string(),
        };
        (org.to_string(), label)
    });

    rsx! {
        div { class: "meta-card",
            div { class: "meta-label", {t!("meta-affiliation")} }
            div { class: "meta-value meta-value--affiliation",
                if let Some(logo) = logo {
                    img { class: "affil-logo", src: "{logo}", alt: "" }
                }
                "{name} {flag}"
                if let Some((org, label)) = badge {
                    span { class: "affil-badge {org}", "{label}" }
                }
            }
        }
    }
}

fn session_card(paper: &Paper) -> Option<Element> {
    paper.session_text().map(|session| {
        text_card(
            t!("meta-session"),
            t!("session-tab", num = session),
            false,
        )
    })
}

fn push_text(cards: &mut Vec<Element>, label: String, value: Option<String>, highlight: bool) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        cards.push(text_card(label, value, highlight));
    }
}

fn with_unit(value: Option<Scalar>, unit: &str) -> Option<String> {
    value.map(|v| format!("{} {unit}", v.text()))
}

/// Simple flat layout, straight from `metrics`/top-level fields.
fn simple_grid(paper: &Paper, logo: Option<String>) -> Vec<Element> {
    let mut cards = Vec::new();
    if let Some(card) = session_card(paper) {
        cards.push(card);
    }
    cards.push(affiliation_card(paper, logo));

    push_text(
        &mut cards,
        t!("meta-process"),
        metrics::technology(paper).map(|v| v.text()),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-area"),
        with_unit(metrics::die_area(paper), "mm\u{00B2}"),
        true,
    );
    push_text(
        &mut cards,
        t!("meta-voltage"),
        metrics::supply_voltage(paper).map(|v| v.text()),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-sram"),
        paper.metrics.sram_kb.as_ref().map(Scalar::text),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-frequency"),
        with_unit(metrics::frequency_mhz(paper), "MHz"),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-power"),
        with_unit(metrics::power_mw(paper), "mW"),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-efficiency"),
        metrics::energy_efficiency(paper).map(|v| v.text()),
        true,
    );
    push_text(
        &mut cards,
        t!("meta-throughput"),
        paper.metrics.throughput.as_ref().map(Scalar::text),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-target-model"),
        metrics::target_model(paper),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-application"),
        paper.application.clone(),
        false,
    );
    cards
}

/// Detailed layout: `metrics_detailed` wins per field, with the flat layer
/// as fallback.
fn detailed_grid(paper: &Paper, logo: Option<String>) -> Vec<Element> {
    let md = &paper.metrics_detailed;
    let mut cards = Vec::new();
    if let Some(card) = session_card(paper) {
        cards.push(card);
    }
    cards.push(affiliation_card(paper, logo));

    // Single-valued detailed fields.
    let simple_fields = [
        (
            t!("meta-process"),
            md.technology.as_ref().map(Scalar::text),
            metrics::technology(paper).map(|v| v.text()),
            false,
        ),
        (
            t!("meta-area"),
            md.die_area.as_ref().map(Scalar::text),
            with_unit(metrics::die_area(paper), "mm\u{00B2}"),
            true,
        ),
        (
            t!("meta-sram"),
            md.sram.as_ref().map(Scalar::text),
            paper.metrics.sram_kb.as_ref().map(Scalar::text),
            false,
        ),
        (
            t!("meta-quantization"),
            md.quantization.as_ref().map(Scalar::text),
            None,
            false,
        ),
    ];
    for (label, value, fallback, highlight) in simple_fields {
        push_text(&mut cards, label, value.or(fallback), highlight);
    }

    // Fields that may carry several values with conditions.
    let multi_fields = [
        (
            t!("meta-voltage"),
            md.supply_voltage.as_ref(),
            metrics::supply_voltage(paper).map(|v| v.text()),
            false,
        ),
        (
            t!("meta-frequency"),
            md.frequency.as_ref(),
            with_unit(paper.metrics.frequency_mhz.clone(), "MHz"),
            false,
        ),
        (
            t!("meta-power"),
            md.power.as_ref(),
            with_unit(metrics::power_mw(paper), "mW"),
            false,
        ),
        (
            t!("meta-efficiency"),
            md.energy_efficiency.as_ref(),
            metrics::energy_efficiency(paper).map(|v| v.text()),
            true,
        ),
        (
            t!("meta-throughput"),
            md.throughput.as_ref(),
            paper.metrics.throughput.as_ref().map(Scalar::text),
            false,
        ),
    ];
    for (label, field, fallback, highlight) in multi_fields {
        match metrics::detailed_field(field, fallback) {
            Some(MetricDisplay::Multi(values)) => cards.push(multi_card(label, values, highlight)),
            Some(MetricDisplay::Simple(value)) => cards.push(text_card(label, value, highlight)),
            None => {}
        }
    }

    push_text(
        &mut cards,
        t!("meta-target-model"),
        metrics::target_model(paper),
        false,
    );
    push_text(
        &mut cards,
        t!("meta-application"),
        paper.application.clone(),
        false,
    );

    if let Some(comparison) = md.comparison.clone() {
        cards.push(text_card(t!("meta-comparison"), comparison, false));
    }

    cards
}

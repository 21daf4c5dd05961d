//! Metric field resolution.
//!
//! A metric may live in up to three places: the rich `metrics_detailed`
//! object, the flat `metrics` object, and a top-level legacy field. The
//! effective display value resolves through that fixed precedence. The
//! comparison table and the sort engine read the flat layer
//! (`metrics` > top-level); the detail page additionally consults
//! `metrics_detailed` through [`detailed_field`]. Empty strings and zero
//! count as absent at every layer, matching the dataset's conventions.

use super::paper::{DetailedField, Paper, Scalar};

fn present(value: Option<&Scalar>) -> Option<Scalar> {
    value.filter(|v| v.is_present()).cloned()
}

/// Process technology node: `metrics.technology`, else `process_node`.
pub fn technology(paper: &Paper) -> Option<Scalar> {
    present(paper.metrics.technology.as_ref())
        .or_else(|| paper.process_node.clone().map(Scalar::Text).filter(Scalar::is_present))
}

/// Die area in mm²: `metrics.die_area_mm2`, else the top-level field.
pub fn die_area(paper: &Paper) -> Option<Scalar> {
    present(paper.metrics.die_area_mm2.as_ref())
        .or_else(|| present(paper.die_area_mm2.as_ref()))
}

/// Power in mW: `metrics.power_mw`, else the top-level field.
pub fn power_mw(paper: &Paper) -> Option<Scalar> {
    present(paper.metrics.power_mw.as_ref()).or_else(|| present(paper.power_mw.as_ref()))
}

/// Energy efficiency: `metrics.energy_efficiency`, else the top-level field.
pub fn energy_efficiency(paper: &Paper) -> Option<Scalar> {
    present(paper.metrics.energy_efficiency.as_ref())
        .or_else(|| present(paper.energy_efficiency.as_ref()))
}

/// Supply voltage: `metrics.supply_voltage`, else the top-level field.
pub fn supply_voltage(paper: &Paper) -> Option<Scalar> {
    present(paper.metrics.supply_voltage.as_ref())
        .or_else(|| present(paper.supply_voltage.as_ref()))
}

/// Clock frequency in MHz: `metrics.frequency_mhz`, else the top-level field.
pub fn frequency_mhz(paper: &Paper) -> Option<Scalar> {
    present(paper.metrics.frequency_mhz.as_ref())
        .or_else(|| present(paper.frequency_mhz.as_ref()))
}

/// Target model: `metrics.target_model`, else the top-level field.
pub fn target_model(paper: &Paper) -> Option<String> {
    paper
        .metrics
        .target_model
        .clone()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| paper.target_model.clone().filter(|s| !s.trim().is_empty()))
}

/// Resolved display for a detail-page metric card.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricDisplay {
    /// A single value line.
    Simple(String),
    /// One line per reported value, optionally qualified by its
    /// measurement condition.
    Multi(Vec<(String, Option<String>)>),
}

/// Resolve a `metrics_detailed` field against an already-formatted fallback
/// from the flat layer. A multi-value entry wins outright; a simple detailed
/// value wins next; otherwise the fallback (if any) is shown as-is.
pub fn detailed_field(
    field: Option<&DetailedField>,
    fallback: Option<String>,
) -> Option<MetricDisplay> {
    match field {
        Some(DetailedField::Multi { values }) if !values.is_empty() => Some(MetricDisplay::Multi(
            values
                .iter()
                .map(|v| {
                    (
                        v.value.as_ref().map(Scalar::text).unwrap_or_default(),
                        v.condition.clone(),
                    )
                })
                .collect(),
        )),
        Some(DetailedField::Simple(value)) if value.is_present() => {
            Some(MetricDisplay::Simple(value.text()))
        }
        _ => fallback
            .filter(|s| !s.trim().is_empty())
            .map(MetricDisplay::Simple),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paper::CondValue;

    fn paper_with_layers() -> Paper {
        let mut paper = Paper {
            id: "10.3".into(),
            process_node: Some("65nm".into()),
            die_area_mm2: Some(Scalar::Num(12.0)),
            ..Default::default()
        };
        paper.metrics.technology = Some(Scalar::Text("28nm".into()));
        paper
    }

    #[test]
    fn metrics_object_takes_precedence() {
        let paper = paper_with_layers();
        assert_eq!(technology(&paper).unwrap().text(), "28nm");
    }

    #[test]
    fn top_level_fills_in_when_metrics_absent() {
        let paper = paper_with_layers();
        assert_eq!(die_area(&paper).unwrap().text(), "12");
    }

    #[test]
    fn empty_metric_strings_fall_through() {
        let mut paper = paper_with_layers();
        paper.metrics.technology = Some(Scalar::Text(String::new()));
        assert_eq!(technology(&paper).unwrap().text(), "65nm");
    }

    #[test]
    fn missing_everywhere_resolves_to_none() {
        let paper = Paper::default();
        assert_eq!(power_mw(&paper), None);
        assert_eq!(target_model(&paper), None);
    }

    #[test]
    fn detailed_multi_values_win_over_fallback() {
        let field = DetailedField::Multi {
            values: vec![CondValue {
                value: Some(Scalar::Text("102.4 TOPS/W".into())),
                condition: Some("INT4, 0.56 V".into()),
            }],
        };
        let display = detailed_field(Some(&field), Some("40 TOPS/W".into())).unwrap();
        match display {
            MetricDisplay::Multi(values) => {
                assert_eq!(values[0].0, "102.4 TOPS/W");
                assert_eq!(values[0].1.as_deref(), Some("INT4, 0.56 V"));
            }
            MetricDisplay::Simple(_) => panic!("expected multi display"),
        }
    }

    #[test]
    fn empty_detailed_field_uses_fallback() {
        let field = DetailedField::Multi { values: Vec::new() };
        assert_eq!(
            detailed_field(Some(&field), Some("450 mW".into())),
            Some(MetricDisplay::Simple("450 mW".into()))
        );
        assert_eq!(detailed_field(None, None), None);
    }
}

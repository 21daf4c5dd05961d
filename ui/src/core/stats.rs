//! Statistics builder.
//!
//! Derives the four aggregate views shown on the overview page. These are
//! always computed over the *full* collection, independent of the active
//! filters — they describe the corpus, not the current view.

use std::collections::BTreeMap;

use super::format::leading_float;
use super::paper::Paper;

/// Bucket label used when a paper carries no value for the keyed field.
pub const MISSING_BUCKET: &str = "N/A";

/// Ordering sentinel for the missing bucket (sorts after every real node).
const MISSING_ORDER: f64 = 999.0;

const NODE_BAR_COLORS: [&str; 8] = [
    "#58a6ff", "#3498db", "#2ecc71", "#e67e22", "#e74c3c", "#9b59b6", "#f1c40f", "#1abc9c",
];

const SESSION_COLORS: [(&str, &str); 5] = [
    ("2", "#58a6ff"),
    ("10", "#e74c3c"),
    ("18", "#2ecc71"),
    ("30", "#e67e22"),
    ("31", "#9b59b6"),
];

const DEFAULT_SESSION_COLOR: &str = "#58a6ff";

const ORG_TYPE_COLORS: [(&str, &str); 4] = [
    ("academia", "#58a6ff"),
    ("industry", "#e74c3c"),
    ("research_inst", "#2ecc71"),
    ("unknown", "#6e7681"),
];

const UNKNOWN_COLOR: &str = "#6e7681";

const COUNTRY_PALETTE: [&str; 12] = [
    "#58a6ff", "#e74c3c", "#2ecc71", "#e67e22", "#9b59b6", "#f1c40f", "#1abc9c", "#3498db",
    "#e91e63", "#00bcd4", "#ff9800", "#8bc34a",
];

/// One row of a histogram card.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub count: usize,
    /// Bar width as a percentage of the largest bucket.
    pub fill_pct: f64,
    pub color: String,
}

/// One slice of a donut distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutEntry {
    /// Raw bucket key; the view layer resolves display labels.
    pub key: String,
    pub count: usize,
    pub color: String,
}

fn count_by<F>(papers: &[Paper], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&Paper) -> String,
{
    let mut counts = BTreeMap::new();
    for paper in papers {
        *counts.entry(key(paper)).or_insert(0) += 1;
    }
    counts
}

fn fill_bars<F>(entries: Vec<(String, usize)>, color: F) -> Vec<BarEntry>
where
    F: Fn(usize, &str) -> String,
{
    let max = entries.iter().map(|(_, c)| *c).max().unwrap_or(0);
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let fill_pct = if max > 0 {
                count as f64 / max as f64 * 100.0
            } else {
                0.0
            };
            let color = color(i, &label);
            BarEntry {
                label,
                count,
                fill_pct,
                color,
            }
        })
        .collect()
}

/// Count per distinct process node, ordered by increasing numeric node
/// size with the missing bucket last.
pub fn process_node_histogram(papers: &[Paper]) -> Vec<BarEntry> {
    let counts = count_by(papers, |p| {
        p.process_node
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| MISSING_BUCKET.to_string())
    });
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| {
        let ka = leading_float(&a.0).unwrap_or(MISSING_ORDER);
        let kb = leading_float(&b.0).unwrap_or(MISSING_ORDER);
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });
    fill_bars(entries, |i, _| {
        NODE_BAR_COLORS[i % NODE_BAR_COLORS.len()].to_string()
    })
}

/// Count per session, ordered by increasing session number. Labels are
/// `S<session>`.
pub fn session_histogram(papers: &[Paper]) -> Vec<BarEntry> {
    let counts = count_by(papers, |p| {
        p.session_text().unwrap_or_else(|| MISSING_BUCKET.to_string())
    });
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| {
        let ka = leading_float(&a.0).unwrap_or(MISSING_ORDER);
        let kb = leading_float(&b.0).unwrap_or(MISSING_ORDER);
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });
    fill_bars(entries, |_, session| {
        SESSION_COLORS
            .iter()
            .find(|(key, _)| *key == session)
            .map(|(_, color)| color.to_string())
            .unwrap_or_else(|| DEFAULT_SESSION_COLOR.to_string())
    })
    .into_iter()
    .map(|mut bar| {
        bar.label = format!("S{}", bar.label);
        bar
    })
    .collect()
}

fn ranked_entries(counts: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Academia / industry / research-institute / unknown distribution,
/// largest count first.
pub fn org_type_distribution(papers: &[Paper]) -> Vec<DonutEntry> {
    let counts = count_by(papers, |p| {
        p.affiliation_info
            .as_ref()
            .and_then(|info| info.org_type.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    });
    ranked_entries(counts)
        .into_iter()
        .map(|(key, count)| {
            let color = ORG_TYPE_COLORS
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, c)| c.to_string())
                .unwrap_or_else(|| UNKNOWN_COLOR.to_string());
            DonutEntry { key, count, color }
        })
        .collect()
}

/// Country distribution, largest count first, palette colors assigned by
/// rank and cycling past the palette size.
pub fn country_distribution(papers: &[Paper]) -> Vec<DonutEntry> {
    let counts = count_by(papers, |p| {
        p.affiliation_info
            .as_ref()
            .and_then(|info| info.country.clone())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "Unknown".to_string())
    });
    ranked_entries(counts)
        .into_iter()
        .enumerate()
        .map(|(i, (key, count))| DonutEntry {
            key,
            count,
            color: COUNTRY_PALETTE[i % COUNTRY_PALETTE.len()].to_string(),
        })
        .collect()
}

/// Donut geometry: ring radius in the fixed 120×120 viewBox.
pub const DONUT_RADIUS: f64 = 42.0;

/// One `<circle>` stroke segment of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub color: String,
    /// Arc length: `count / total` of the circumference.
    pub length: f64,
    pub circumference: f64,
    /// Accumulated offset of the preceding segments (negated for
    /// `stroke-dashoffset`, so consecutive arcs tile the circle).
    pub offset: f64,
}

/// Lay out donut entries as consecutive arcs starting at the top of the
/// circle (the view applies the fixed −90° rotation).
pub fn donut_segments(entries: &[DonutEntry]) -> Vec<DonutSegment> {
    let total: usize = entries.iter().map(|e| e.count).sum();
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let mut offset = 0.0;
    entries
        .iter()
        .map(|entry| {
            let length = if total > 0 {
                entry.count as f64 / total as f64 * circumference
            } else {
                0.0
            };
            let segment = DonutSegment {
                color: entry.color.clone(),
                length,
                circumference,
                offset,
            };
            offset += length;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paper::{AffiliationInfo, Scalar};

    fn paper(id: &str, session: u32, node: Option<&str>) -> Paper {
        Paper {
            id: id.to_string(),
            session: Some(Scalar::Num(session as f64)),
            process_node: node.map(str::to_string),
            ..Default::default()
        }
    }

    fn corpus() -> Vec<Paper> {
        let mut a = paper("2.1", 2, Some("28nm"));
        a.affiliation_info = Some(AffiliationInfo {
            org_type: Some("academia".into()),
            country: Some("USA".into()),
            ..Default::default()
        });
        let mut b = paper("2.2", 2, Some("4nm"));
        b.affiliation_info = Some(AffiliationInfo {
            org_type: Some("industry".into()),
            country: Some("Korea".into()),
            ..Default::default()
        });
        let mut c = paper("10.3", 10, None);
        c.affiliation_info = Some(AffiliationInfo {
            org_type: Some("academia".into()),
            country: Some("USA".into()),
            ..Default::default()
        });
        let d = paper("18.1", 18, Some("28nm"));
        vec![a, b, c, d]
    }

    #[test]
    fn histogram_counts_sum_to_collection_size() {
        let papers = corpus();
        let node_total: usize = process_node_histogram(&papers).iter().map(|e| e.count).sum();
        let session_total: usize = session_histogram(&papers).iter().map(|e| e.count).sum();
        assert_eq!(node_total, papers.len());
        assert_eq!(session_total, papers.len());
    }

    #[test]
    fn node_histogram_orders_numerically_with_missing_last() {
        let papers = corpus();
        let labels: Vec<_> = process_node_histogram(&papers)
            .iter()
            .map(|e| e.label.clone())
            .collect();
        assert_eq!(labels, ["4nm", "28nm", "N/A"]);
    }

    #[test]
    fn bar_fill_is_relative_to_largest_bucket() {
        let papers = corpus();
        let bars = process_node_histogram(&papers);
        let max_bar = bars.iter().find(|b| b.label == "28nm").unwrap();
        assert_eq!(max_bar.count, 2);
        assert!((max_bar.fill_pct - 100.0).abs() < 1e-9);
        let small = bars.iter().find(|b| b.label == "4nm").unwrap();
        assert!((small.fill_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn session_histogram_orders_by_session_number() {
        let papers = corpus();
        let labels: Vec<_> = session_histogram(&papers)
            .iter()
            .map(|e| e.label.clone())
            .collect();
        assert_eq!(labels, ["S2", "S10", "S18"]);
    }

    #[test]
    fn org_type_distribution_ranks_largest_first() {
        let papers = corpus();
        let entries = org_type_distribution(&papers);
        assert_eq!(entries[0].key, "academia");
        assert_eq!(entries[0].count, 2);
        // A paper without affiliation_info lands in the unknown bucket.
        assert!(entries.iter().any(|e| e.key == "unknown"));
        let total: usize = entries.iter().map(|e| e.count).sum();
        assert_eq!(total, papers.len());
    }

    #[test]
    fn country_palette_cycles_past_its_length() {
        let papers: Vec<Paper> = (0..15)
            .map(|i| {
                let mut p = paper(&format!("2.{i}"), 2, None);
                p.affiliation_info = Some(AffiliationInfo {
                    country: Some(format!("Country {i}")),
                    ..Default::default()
                });
                p
            })
            .collect();
        let entries = country_distribution(&papers);
        assert_eq!(entries.len(), 15);
        assert_eq!(entries[0].color, entries[COUNTRY_PALETTE.len()].color);
    }

    #[test]
    fn donut_arcs_tile_the_full_circle() {
        let papers = corpus();
        let entries = org_type_distribution(&papers);
        let segments = donut_segments(&entries);
        let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
        let total_length: f64 = segments.iter().map(|s| s.length).sum();
        assert!((total_length - circumference).abs() < 1e-9);
        // Consecutive layout: each offset is the sum of preceding lengths.
        let mut acc = 0.0;
        for seg in &segments {
            assert!((seg.offset - acc).abs() < 1e-9);
            acc += seg.length;
        }
    }
}

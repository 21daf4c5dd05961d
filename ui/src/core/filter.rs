//! Filter/sort engine for the overview table.
//!
//! Pure functions from the full collection + the current [`FilterState`] to
//! the visible subset in display order. All predicates are AND-combined.
//! Session, process and application predicates match the top-level dataset
//! fields — the dropdown options are extracted from those same fields, so
//! the options and the predicate can never disagree.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::format::leading_float;
use super::metrics;
use super::paper::Paper;

/// Session selector value that disables session filtering.
pub const ALL_SESSIONS: &str = "all";

/// Sentinel sort key for missing/non-numeric values: last ascending,
/// first descending.
const MISSING_NUMERIC: f64 = f64::INFINITY;

/// Columns of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Title,
    Affiliation,
    ProcessNode,
    DieArea,
    Power,
    Efficiency,
    TargetModel,
    Innovations,
}

impl SortColumn {
    pub fn sortable(self) -> bool {
        !matches!(self, SortColumn::Efficiency | SortColumn::Innovations)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub ascending: bool,
}

/// The complete, serializable overview UI state. Mutated only by user
/// interaction handlers; every mutation is followed by a full re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub session: String,
    pub process: String,
    pub application: String,
    pub innovation_type: String,
    pub analytical_tags: Vec<String>,
    pub search: String,
    pub sort: Option<Sort>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            session: ALL_SESSIONS.to_string(),
            process: String::new(),
            application: String::new(),
            innovation_type: String::new(),
            analytical_tags: Vec::new(),
            search: String::new(),
            sort: None,
        }
    }
}

impl FilterState {
    /// Header click: first click sorts ascending, a repeat click on the
    /// active column flips direction. Non-sortable columns are ignored.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if !column.sortable() {
            return;
        }
        self.sort = match self.sort {
            Some(sort) if sort.column == column => Some(Sort {
                column,
                ascending: !sort.ascending,
            }),
            _ => Some(Sort {
                column,
                ascending: true,
            }),
        };
    }

    /// Tag bar click: toggles membership in the selected set.
    pub fn toggle_analytical_tag(&mut self, tag: &str) {
        if let Some(pos) = self.analytical_tags.iter().position(|t| t == tag) {
            self.analytical_tags.remove(pos);
        } else {
            self.analytical_tags.push(tag.to_string());
        }
    }
}

fn matches(paper: &Paper, filters: &FilterState) -> bool {
    if filters.session != ALL_SESSIONS
        && paper.session_text().as_deref() != Some(filters.session.as_str())
    {
        return false;
    }

    if !filters.process.is_empty()
        && paper.process_node.as_deref() != Some(filters.process.as_str())
    {
        return false;
    }

    if !filters.application.is_empty()
        && paper.application.as_deref() != Some(filters.application.as_str())
    {
        return false;
    }

    if !filters.innovation_type.is_empty()
        && !paper
            .innovations
            .iter()
            .any(|inn| inn.kind.as_deref() == Some(filters.innovation_type.as_str()))
    {
        return false;
    }

    if !filters
        .analytical_tags
        .iter()
        .all(|tag| paper.analytical_tags.contains(tag))
    {
        return false;
    }

    if !filters.search.is_empty() {
        let needle = filters.search.to_lowercase();
        let haystack = [
            paper.title.as_str(),
            paper.title_zh.as_deref().unwrap_or(""),
            paper.affiliation.as_deref().unwrap_or(""),
            &paper.tags.join(" "),
        ]
        .join(" ")
        .to_lowercase();
        if !haystack.contains(&needle) {
            return false;
        }
    }

    true
}

#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
}

fn numeric_key(value: Option<f64>) -> SortKey {
    SortKey::Number(value.unwrap_or(MISSING_NUMERIC))
}

fn text_key(value: &str) -> SortKey {
    SortKey::Text(value.to_lowercase())
}

fn sort_key(paper: &Paper, column: SortColumn) -> SortKey {
    match column {
        SortColumn::Id => numeric_key(leading_float(&paper.id)),
        SortColumn::Title => text_key(&paper.title),
        SortColumn::Affiliation => text_key(paper.affiliation.as_deref().unwrap_or("")),
        SortColumn::ProcessNode => numeric_key(
            paper
                .process_node
                .as_deref()
                .and_then(leading_float),
        ),
        SortColumn::DieArea => numeric_key(metrics::die_area(paper).and_then(|v| v.numeric())),
        SortColumn::Power => numeric_key(metrics::power_mw(paper).and_then(|v| v.numeric())),
        SortColumn::TargetModel => text_key(paper.target_model.as_deref().unwrap_or("")),
        // Not sortable from the UI; fall back to a case-insensitive string
        // comparison of the raw field.
        SortColumn::Efficiency => text_key(
            &paper
                .energy_efficiency
                .as_ref()
                .map(|v| v.text())
                .unwrap_or_default(),
        ),
        SortColumn::Innovations => text_key(
            &paper
                .innovations
                .iter()
                .map(|inn| inn.tag.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

fn cmp_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
    }
}

/// The visible subset in display order: every paper satisfying all active
/// predicates, sorted when a sort column is set, otherwise in collection
/// order. No pagination — the caller renders the whole list.
pub fn visible_papers<'a>(papers: &'a [Paper], filters: &FilterState) -> Vec<&'a Paper> {
    let mut result: Vec<&Paper> = papers.iter().filter(|p| matches(p, filters)).collect();

    if let Some(sort) = filters.sort {
        result.sort_by(|a, b| {
            let ord = cmp_keys(&sort_key(a, sort.column), &sort_key(b, sort.column));
            if sort.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    result
}

fn sorted_unique<I: IntoIterator<Item = String>>(values: I) -> Vec<String> {
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct process nodes across the full collection, sorted.
pub fn process_options(papers: &[Paper]) -> Vec<String> {
    sorted_unique(papers.iter().filter_map(|p| p.process_node.clone()))
}

/// Distinct applications across the full collection, sorted.
pub fn application_options(papers: &[Paper]) -> Vec<String> {
    sorted_unique(papers.iter().filter_map(|p| p.application.clone()))
}

/// Distinct innovation types across the full collection, sorted.
pub fn innovation_type_options(papers: &[Paper]) -> Vec<String> {
    sorted_unique(
        papers
            .iter()
            .flat_map(|p| p.innovations.iter().filter_map(|inn| inn.kind.clone())),
    )
}

/// Distinct analytical tags across the full collection, sorted.
pub fn analytical_tag_options(papers: &[Paper]) -> Vec<String> {
    sorted_unique(papers.iter().flat_map(|p| p.analytical_tags.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paper::{Innovation, Scalar};

    fn paper(id: &str, session: u32) -> Paper {
        Paper {
            id: id.to_string(),
            title: format!("Paper {id}"),
            session: Some(Scalar::Num(session as f64)),
            ..Default::default()
        }
    }

    fn collection() -> Vec<Paper> {
        let mut a = paper("2.1", 2);
        a.title = "Sparse Accelerator".into();
        a.affiliation = Some("MIT".into());
        a.process_node = Some("28nm".into());
        a.die_area_mm2 = Some(Scalar::Num(5.0));
        a.analytical_tags = vec!["sparsity".into(), "int8".into()];
        a.innovations = vec![Innovation {
            tag: "zero skipping".into(),
            kind: Some("hw-arch".into()),
        }];

        let mut b = paper("2.2", 2);
        b.title = "Dense Transformer Chip".into();
        b.affiliation = Some("KAIST".into());
        b.process_node = Some("4nm".into());
        b.analytical_tags = vec!["sparsity".into()];
        b.application = Some("LLM".into());

        let mut c = paper("10.3", 10);
        c.title = "存内计算芯片".into();
        c.tags = vec!["CIM".into()];
        c.die_area_mm2 = Some(Scalar::Num(2.0));

        vec![a, b, c]
    }

    #[test]
    fn no_active_filters_is_identity() {
        let papers = collection();
        let visible = visible_papers(&papers, &FilterState::default());
        assert_eq!(visible.len(), papers.len());
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2.1", "2.2", "10.3"]);
    }

    #[test]
    fn session_tab_restricts_to_matching_session() {
        let papers = collection();
        let filters = FilterState {
            session: "2".into(),
            ..Default::default()
        };
        let ids: Vec<_> = visible_papers(&papers, &filters)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // Original relative order is preserved absent an active sort.
        assert_eq!(ids, ["2.1", "2.2"]);
    }

    #[test]
    fn every_visible_paper_satisfies_all_predicates() {
        let papers = collection();
        let filters = FilterState {
            session: "2".into(),
            analytical_tags: vec!["sparsity".into()],
            ..Default::default()
        };
        let visible = visible_papers(&papers, &filters);
        assert!(!visible.is_empty());
        for p in &visible {
            assert_eq!(p.session_text().as_deref(), Some("2"));
            assert!(p.analytical_tags.contains(&"sparsity".to_string()));
        }
        // ...and nothing satisfying the predicates is excluded.
        let excluded = papers
            .iter()
            .filter(|p| !visible.iter().any(|v| v.id == p.id))
            .filter(|p| {
                p.session_text().as_deref() == Some("2")
                    && p.analytical_tags.contains(&"sparsity".to_string())
            })
            .count();
        assert_eq!(excluded, 0);
    }

    #[test]
    fn analytical_tag_filter_is_monotonic() {
        let papers = collection();
        let mut filters = FilterState::default();
        let baseline = visible_papers(&papers, &filters).len();

        filters.analytical_tags.push("sparsity".into());
        let one_tag = visible_papers(&papers, &filters).len();
        assert!(one_tag <= baseline);

        filters.analytical_tags.push("int8".into());
        let two_tags = visible_papers(&papers, &filters).len();
        assert!(two_tags <= one_tag);
        // AND semantics: only 2.1 carries both tags.
        assert_eq!(two_tags, 1);
    }

    #[test]
    fn innovation_type_matches_any_innovation() {
        let papers = collection();
        let filters = FilterState {
            innovation_type: "hw-arch".into(),
            ..Default::default()
        };
        let ids: Vec<_> = visible_papers(&papers, &filters)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["2.1"]);
    }

    #[test]
    fn search_is_case_insensitive_across_title_affiliation_tags() {
        let papers = collection();
        for needle in ["sparse", "kaist", "cim", "存内"] {
            let filters = FilterState {
                search: needle.to_string(),
                ..Default::default()
            };
            assert_eq!(
                visible_papers(&papers, &filters).len(),
                1,
                "query {needle:?}"
            );
        }
    }

    #[test]
    fn missing_numeric_values_sort_last_ascending_first_descending() {
        let papers = collection();
        let mut filters = FilterState {
            sort: Some(Sort {
                column: SortColumn::DieArea,
                ascending: true,
            }),
            ..Default::default()
        };
        // 2.2 has no area anywhere: after the 5.0 paper ascending.
        let ids: Vec<_> = visible_papers(&papers, &filters)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["10.3", "2.1", "2.2"]);

        filters.sort = Some(Sort {
            column: SortColumn::DieArea,
            ascending: false,
        });
        let ids: Vec<_> = visible_papers(&papers, &filters)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["2.2", "2.1", "10.3"]);
    }

    #[test]
    fn resorting_the_same_column_reverses_exactly() {
        let papers = collection();
        let asc = FilterState {
            sort: Some(Sort {
                column: SortColumn::Id,
                ascending: true,
            }),
            ..Default::default()
        };
        let desc = FilterState {
            sort: Some(Sort {
                column: SortColumn::Id,
                ascending: false,
            }),
            ..Default::default()
        };
        let forward: Vec<_> = visible_papers(&papers, &asc)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        let mut backward: Vec<_> = visible_papers(&papers, &desc)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward, ["2.1", "2.2", "10.3"]);
    }

    #[test]
    fn process_node_sorts_by_leading_float() {
        let papers = collection();
        let filters = FilterState {
            sort: Some(Sort {
                column: SortColumn::ProcessNode,
                ascending: true,
            }),
            ..Default::default()
        };
        let ids: Vec<_> = visible_papers(&papers, &filters)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // 4nm < 28nm < missing.
        assert_eq!(ids, ["2.2", "2.1", "10.3"]);
    }

    #[test]
    fn toggle_sort_flips_direction_on_repeat() {
        let mut filters = FilterState::default();
        filters.toggle_sort(SortColumn::Power);
        assert_eq!(
            filters.sort,
            Some(Sort {
                column: SortColumn::Power,
                ascending: true
            })
        );
        filters.toggle_sort(SortColumn::Power);
        assert_eq!(
            filters.sort,
            Some(Sort {
                column: SortColumn::Power,
                ascending: false
            })
        );
        filters.toggle_sort(SortColumn::Title);
        assert_eq!(
            filters.sort,
            Some(Sort {
                column: SortColumn::Title,
                ascending: true
            })
        );
        // Non-sortable columns leave the sort untouched.
        filters.toggle_sort(SortColumn::Innovations);
        assert_eq!(filters.sort.unwrap().column, SortColumn::Title);
    }

    #[test]
    fn dropdown_options_come_from_full_collection_sorted_unique() {
        let papers = collection();
        assert_eq!(process_options(&papers), ["28nm", "4nm"]);
        assert_eq!(application_options(&papers), ["LLM"]);
        assert_eq!(innovation_type_options(&papers), ["hw-arch"]);
        assert_eq!(analytical_tag_options(&papers), ["int8", "sparsity"]);
    }
}

use dioxus::prelude::*;

use crate::components::app_navbar::paper_link;
use crate::core::format::{country_flag, format_power_short, innovation_class};
use crate::core::metrics;
use crate::core::net;
use crate::core::paper::Paper;
use crate::store;
use crate::t;

use crate::core::filter::SortColumn;

/// Pre-rendered display values for one comparison-table row. Rows are
/// built up front from the visible papers, then rendered — keeps the
/// markup free of fallback chains.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub title_zh: Option<String>,
    pub affiliation: String,
    pub logo: Option<String>,
    pub flag: String,
    pub process: String,
    pub area: String,
    pub power: String,
    pub efficiency: String,
    pub target_model: String,
    /// Innovation pills: (tag, css class).
    pub innovations: Vec<(String, &'static str)>,
}

fn dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".into())
}

/// Build display rows for the visible papers, in display order.
pub fn build_rows(papers: &[&Paper]) -> Vec<TableRow> {
    papers
        .iter()
        .map(|paper| {
            let info = paper.affiliation_info.as_ref();
            TableRow {
                id: paper.id.clone(),
                title: paper.title.clone(),
                title_zh: paper.title_zh.clone(),
                affiliation: dash(paper.affiliation.clone()),
                logo: info
                    .and_then(|i| i.logo.as_deref())
                    .map(net::asset_url),
                flag: info
                    .and_then(|i| i.country_code.as_deref())
                    .map(country_flag)
                    .unwrap_or_default(),
                process: dash(metrics::technology(paper).map(|v| v.text())),
                area: metrics::die_area(paper)
                    .map(|v| format!("{} mm\u{00B2}", v.text()))
                    .unwrap_or_else(|| "-".into()),
                power: format_power_short(metrics::power_mw(paper).as_ref()),
                efficiency: dash(metrics::energy_efficiency(paper).map(|v| v.text())),
                target_model: dash(paper.target_model.clone()),
                innovations: paper
                    .innovations
                    .iter()
                    .map(|inn| (inn.tag.clone(), innovation_class(inn.kind.as_deref())))
                    .collect(),
            }
        })
        .collect()
}

fn columns() -> [(SortColumn, String); 9] {
    [
        (SortColumn::Id, t!("col-id")),
        (SortColumn::Title, t!("col-title")),
        (SortColumn::Affiliation, t!("col-affiliation")),
        (SortColumn::ProcessNode, t!("col-process")),
        (SortColumn::DieArea, t!("col-area")),
        (SortColumn::Power, t!("col-power")),
        (SortColumn::Efficiency, t!("col-efficiency")),
        (SortColumn::TargetModel, t!("col-target-model")),
        (SortColumn::Innovations, t!("col-innovations")),
    ]
}

/// The comparison table. Sortable headers toggle the shared sort state;
/// clicking anywhere else in a row navigates to that paper.
#[component]
pub fn ComparisonTable(rows: Vec<TableRow>) -> Element {
    let mut filters = store::use_filters();
    let sort = filters.read().sort;

    let headers = columns().into_iter().map(|(column, label)| {
        let is_active = sort.map(|s| s.column == column).unwrap_or(false);
        let arrow = match sort {
            Some(s) if s.column == column && !s.ascending => "\u{25BC}",
            _ => "\u{25B2}",
        };
        rsx! {
            div {
                class: "th",
                onclick: move |_| filters.write().toggle_sort(column),
                "{label}"
                if column.sortable() {
                    span {
                        class: format!("sort-arrow{}", if is_active { " active" } else { "" }),
                        " {arrow}"
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "table-wrapper",
            div { class: "comp-table",
                {headers}
                for row in rows {
                    {render_row(row)}
                }
            }
        }
    }
}

fn render_row(row: TableRow) -> Element {
    let cells = rsx! {
        div { class: "td", "{row.id}" }
        div { class: "td title-cell",
            span { class: "paper-title", "{row.title}" }
            if let Some(title_zh) = row.title_zh.as_ref() {
                span { class: "paper-title-zh", "{title_zh}" }
            }
        }
        div { class: "td",
            if let Some(logo) = row.logo.as_ref() {
                img { class: "affil-logo", src: "{logo}", alt: "" }
            }
            "{row.affiliation} {row.flag}"
        }
        div { class: "td", "{row.process}" }
        div { class: "td", "{row.area}" }
        div { class: "td", "{row.power}" }
        div { class: "td", "{row.efficiency}" }
        div { class: "td", "{row.target_model}" }
        div { class: "td tags-cell",
            for (tag, class) in row.innovations.iter() {
                span { class: "tag-pill {class}", title: "{tag}", "{tag}" }
            }
        }
    };

    paper_link(&row.id, "row", cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paper::{Innovation, Scalar};

    #[test]
    fn rows_format_metrics_with_placeholders() {
        let mut paper = Paper {
            id: "2.1".into(),
            title: "Sparse Accelerator".into(),
            ..Default::default()
        };
        paper.metrics.power_mw = Some(Scalar::Num(1500.0));
        paper.innovations = vec![Innovation {
            tag: "zero skipping".into(),
            kind: Some("hw-arch".into()),
        }];

        let papers = vec![&paper];
        let rows = build_rows(&papers);
        let row = &rows[0];
        assert_eq!(row.power, "1.5 W");
        assert_eq!(row.process, "-");
        assert_eq!(row.area, "-");
        assert_eq!(row.affiliation, "-");
        assert_eq!(row.innovations[0].1, "tag-hw-arch");
    }

    #[test]
    fn rows_carry_resolved_area_with_unit() {
        let paper = Paper {
            id: "10.3".into(),
            die_area_mm2: Some(Scalar::Num(4.5)),
            ..Default::default()
        };
        let papers = vec![&paper];
        let rows = build_rows(&papers);
        assert_eq!(rows[0].area, "4.5 mm\u{00B2}");
    }
}

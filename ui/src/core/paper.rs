//! Typed schema for the paper dataset.
//!
//! The dataset is duck-typed at the source: most fields are optional, numeric
//! values may arrive as JSON numbers or strings, and newer records carry a
//! nested `metrics` / `metrics_detailed` object while older ones keep the same
//! values at the top level. Everything is normalized here, once, at
//! deserialization time so the rest of the crate can assume stable shapes.
//! Unknown fields are ignored.

use serde::Deserialize;

use super::format::leading_float;

/// A dataset value that may be a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Num(f64),
    Text(String),
}

impl Scalar {
    /// Display form: numbers drop a trailing `.0`, strings pass through.
    pub fn text(&self) -> String {
        match self {
            Scalar::Num(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            Scalar::Num(n) => format!("{n}"),
            Scalar::Text(s) => s.clone(),
        }
    }

    /// Numeric form, parsing the longest numeric prefix of strings
    /// (`"28nm"` → 28) the way the upstream data expects.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Scalar::Num(n) => Some(*n),
            Scalar::Text(s) => leading_float(s),
        }
    }

    /// Mirrors the dataset's "present" convention: empty strings and zero
    /// both count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Num(n) => *n != 0.0,
            Scalar::Text(s) => !s.trim().is_empty(),
        }
    }
}

/// One cataloged entry in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paper {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_zh: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub affiliation_info: Option<AffiliationInfo>,
    #[serde(default)]
    pub session: Option<Scalar>,
    #[serde(default)]
    pub process_node: Option<String>,
    #[serde(default)]
    pub die_area_mm2: Option<Scalar>,
    #[serde(default)]
    pub supply_voltage: Option<Scalar>,
    #[serde(default)]
    pub frequency_mhz: Option<Scalar>,
    #[serde(default)]
    pub power_mw: Option<Scalar>,
    #[serde(default)]
    pub energy_efficiency: Option<Scalar>,
    #[serde(default)]
    pub target_model: Option<String>,
    #[serde(default)]
    pub application: Option<String>,
    #[serde(default)]
    pub metrics: Metrics,
    #[serde(default)]
    pub metrics_detailed: MetricsDetailed,
    #[serde(default)]
    pub figures: Vec<Figure>,
    #[serde(default)]
    pub innovations: Vec<Innovation>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub analytical_tags: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub title_annotation: Option<TitleAnnotation>,
}

impl Paper {
    /// Session as the canonical string used for tab matching and grouping.
    pub fn session_text(&self) -> Option<String> {
        self.session.as_ref().map(Scalar::text)
    }
}

/// Structured affiliation enrichment attached by the dataset producer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AffiliationInfo {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(rename = "type", default)]
    pub org_type: Option<String>,
}

/// Flat metric object; takes precedence over the top-level legacy fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metrics {
    #[serde(default)]
    pub technology: Option<Scalar>,
    #[serde(default)]
    pub die_area_mm2: Option<Scalar>,
    #[serde(default)]
    pub supply_voltage: Option<Scalar>,
    #[serde(default)]
    pub sram_kb: Option<Scalar>,
    #[serde(default)]
    pub frequency_mhz: Option<Scalar>,
    #[serde(default)]
    pub power_mw: Option<Scalar>,
    #[serde(default)]
    pub energy_efficiency: Option<Scalar>,
    #[serde(default)]
    pub throughput: Option<Scalar>,
    #[serde(default)]
    pub target_model: Option<String>,
}

/// A detailed metric field: either a plain value or a list of values, each
/// qualified by the measurement condition it was reported under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DetailedField {
    Multi {
        #[serde(default)]
        values: Vec<CondValue>,
    },
    Simple(Scalar),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CondValue {
    #[serde(default)]
    pub value: Option<Scalar>,
    #[serde(default)]
    pub condition: Option<String>,
}

/// Richer per-field metrics; takes precedence over [`Metrics`] when any
/// field is populated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetricsDetailed {
    #[serde(default)]
    pub technology: Option<Scalar>,
    #[serde(default)]
    pub die_area: Option<Scalar>,
    #[serde(default)]
    pub sram: Option<Scalar>,
    #[serde(default)]
    pub quantization: Option<Scalar>,
    #[serde(default)]
    pub supply_voltage: Option<DetailedField>,
    #[serde(default)]
    pub frequency: Option<DetailedField>,
    #[serde(default)]
    pub power: Option<DetailedField>,
    #[serde(default)]
    pub energy_efficiency: Option<DetailedField>,
    #[serde(default)]
    pub throughput: Option<DetailedField>,
    #[serde(default)]
    pub comparison: Option<String>,
    #[serde(default)]
    pub model_benchmarks: Vec<ModelBenchmark>,
}

impl MetricsDetailed {
    /// True when no field carries data; the detail page then falls back to
    /// the simple card layout.
    pub fn is_empty(&self) -> bool {
        self.technology.is_none()
            && self.die_area.is_none()
            && self.sram.is_none()
            && self.quantization.is_none()
            && self.supply_voltage.is_none()
            && self.frequency.is_none()
            && self.power.is_none()
            && self.energy_efficiency.is_none()
            && self.throughput.is_none()
            && self.comparison.is_none()
            && self.model_benchmarks.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelBenchmark {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A numbered illustration belonging to a paper.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Figure {
    pub num: u32,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A tagged claim about a paper's contribution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Innovation {
    pub tag: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Challenge {
    pub text: String,
    #[serde(default)]
    pub text_en: Option<String>,
    /// Index into the paper's `ideas`; not validated by the producer and may
    /// point past the end of the list.
    #[serde(default)]
    pub related_idea_idx: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Idea {
    pub text: String,
    #[serde(default)]
    pub text_en: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Character-gloss annotation for the title display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TitleAnnotation {
    #[serde(default)]
    pub segments: Vec<GlossSegment>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlossSegment {
    pub text: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Per-paper structured text document (`data/<id>/text.json`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextDoc {
    #[serde(default)]
    pub sections: Vec<TextSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextSection {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub figure: Option<u32>,
}

impl TextSection {
    pub fn is_body(&self) -> bool {
        self.kind == "body"
    }
}

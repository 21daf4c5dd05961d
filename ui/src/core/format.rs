//! Formatting helpers for presenting catalog values.

use super::paper::Scalar;

/// Parse the longest numeric prefix of a string, e.g. `"28nm"` → `28.0`.
///
/// The dataset leans on this for process nodes, paper identifiers and
/// metric strings that carry a unit suffix.
pub fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Compact display for a power value stored in milliwatts.
///
/// Values ≥ 1 MmW render in watts (scaled by 1e6), values ≥ 1 000 mW in
/// watts (scaled by 1e3), everything else stays in milliwatts. Absent or
/// zero values render as a placeholder dash; unparsable text passes
/// through verbatim.
pub fn format_power_short(value: Option<&Scalar>) -> String {
    let Some(value) = value.filter(|v| v.is_present()) else {
        return "-".to_string();
    };
    let Some(num) = value.numeric() else {
        return value.text();
    };
    if num >= 1_000_000.0 {
        format!("{:.1} W", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.1} W", num / 1_000.0)
    } else {
        format!("{} mW", Scalar::Num(num).text())
    }
}

/// Regional-indicator emoji for an ISO country code (`"US"` → 🇺🇸).
pub fn country_flag(code: &str) -> String {
    code.trim()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter_map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + 127_397))
        .collect()
}

/// Character-safe truncation for sidebar labels (titles may be CJK).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn normalized_kind(kind: &str) -> String {
    kind.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect()
}

/// CSS class for an innovation tag pill.
pub fn innovation_class(kind: Option<&str>) -> &'static str {
    let Some(kind) = kind else {
        return "tag-neutral";
    };
    match normalized_kind(kind).as_str() {
        "hwarch" => "tag-hw-arch",
        "hwcircuit" => "tag-hw-circuit",
        "sw" => "tag-sw",
        "codesign" => "tag-codesign",
        "system" => "tag-system",
        _ => "tag-neutral",
    }
}

/// CSS class for an idea card, keyed by the same type vocabulary.
pub fn idea_type_class(kind: Option<&str>) -> &'static str {
    let Some(kind) = kind else {
        return "";
    };
    match normalized_kind(kind).as_str() {
        "hwarch" => "type-hw-arch",
        "hwcircuit" => "type-hw-circuit",
        "sw" => "type-sw",
        "codesign" => "type-codesign",
        "system" => "type-system",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_float_handles_unit_suffixes() {
        assert_eq!(leading_float("28nm"), Some(28.0));
        assert_eq!(leading_float("4.5 mm2"), Some(4.5));
        assert_eq!(leading_float("2.1"), Some(2.1));
        assert_eq!(leading_float("-3.2V"), Some(-3.2));
        assert_eq!(leading_float("N/A"), None);
        assert_eq!(leading_float(""), None);
    }

    #[test]
    fn power_rescales_by_magnitude() {
        assert_eq!(format_power_short(Some(&Scalar::Num(450.0))), "450 mW");
        assert_eq!(format_power_short(Some(&Scalar::Num(1500.0))), "1.5 W");
        assert_eq!(
            format_power_short(Some(&Scalar::Num(2_300_000.0))),
            "2.3 W"
        );
        assert_eq!(format_power_short(None), "-");
        assert_eq!(format_power_short(Some(&Scalar::Num(0.0))), "-");
        assert_eq!(
            format_power_short(Some(&Scalar::Text("see paper".into()))),
            "see paper"
        );
    }

    #[test]
    fn country_flag_maps_to_regional_indicators() {
        assert_eq!(country_flag("us"), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(country_flag(""), "");
    }

    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate_chars("基于存内计算的加速器架构研究", 4), "基于存内");
        assert_eq!(truncate_chars("short", 30), "short");
    }

    #[test]
    fn innovation_kinds_normalize_separators() {
        assert_eq!(innovation_class(Some("hw-arch")), "tag-hw-arch");
        assert_eq!(innovation_class(Some("HW_Arch")), "tag-hw-arch");
        assert_eq!(innovation_class(Some("co-design")), "tag-codesign");
        assert_eq!(innovation_class(Some("quantum")), "tag-neutral");
        assert_eq!(innovation_class(None), "tag-neutral");
        assert_eq!(idea_type_class(Some("sw")), "type-sw");
        assert_eq!(idea_type_class(None), "");
    }
}

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "chipdex-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Simple parser: extract message IDs from a Fluent file.
/// We treat any line that starts (after optional whitespace) with:
///    <identifier> =
/// as a message definition. Comments, terms (-prefix), blank lines ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let (maybe_id, _) = line.split_at(eq_pos);
            let id = maybe_id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Extract all `t!` macro occurrences (including argument forms) from the
/// source files under `src/`. Conservative: only direct literal first
/// arguments are matched, which is the only usage pattern in this crate.
fn used_keys(src_root: &Path) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).expect("readable src dir") {
            let entry = entry.expect("dir entry");
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
                let content = fs::read_to_string(&path).expect("readable source file");
                collect_t_macro_keys(&content, &mut keys);
            }
        }
    }
    keys
}

fn collect_t_macro_keys(content: &str, keys: &mut BTreeSet<String>) {
    let bytes = content.as_bytes();
    let mut rest = content;
    let mut base = 0;
    while let Some(pos) = rest.find("t!(\"") {
        let abs = base + pos;
        // Require a macro-name boundary so `format!("..")` never matches.
        let bounded = abs == 0
            || !(bytes[abs - 1].is_ascii_alphanumeric() || bytes[abs - 1] == b'_');
        rest = &rest[pos + 4..];
        base = abs + 4;
        if let Some(end) = rest.find('"') {
            if bounded {
                keys.insert(rest[..end].to_string());
            }
            rest = &rest[end..];
            base += end;
        } else {
            break;
        }
    }
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn locale_keys(locale: &str) -> BTreeSet<String> {
    let path = crate_root().join(I18N_DIR).join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn every_t_macro_key_exists_in_fallback() {
    let fallback = locale_keys("en-US");
    let used = used_keys(&crate_root().join("src"));
    assert!(!used.is_empty(), "no t! usages found — scanner broken?");

    let missing: Vec<_> = used.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used via t! but missing from en-US/{FTL_FILENAME}:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn every_locale_provides_all_fallback_keys() {
    let fallback = locale_keys("en-US");
    assert!(!fallback.is_empty(), "fallback locale has no keys");

    let i18n_root = crate_root().join(I18N_DIR);
    for entry in fs::read_dir(&i18n_root).expect("readable i18n dir") {
        let entry = entry.expect("dir entry");
        if !entry.path().is_dir() {
            continue;
        }
        let locale = entry.file_name().to_string_lossy().to_string();
        if locale == "en-US" {
            continue;
        }
        let keys = locale_keys(&locale);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        assert!(
            missing.is_empty(),
            "locale {locale} is missing {} key(s):\n  {}",
            missing.len(),
            missing.join("\n  ")
        );
    }
}

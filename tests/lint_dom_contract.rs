//! Lint: components must read selectors and element ids from `SiteConfig`.
//!
//! The page markup is an external contract. Every selector lives in
//! `src/config.rs` so a page can override it; a component that writes
//! `".nav-link"` or `get_element_by_id("people")` inline silently ignores the
//! override.
//!
//! This test scans the non-test part of every file under `src/components/`
//! and flags class-selector literals and literal arguments to element lookups.

use std::fs;
use std::path::Path;

const LOOKUP_CALLS: &[&str] = &[
    "query(",
    "query_all(",
    "query_selector(",
    "query_selector_all(",
    "get_element_by_id(",
];

/// Whether `s` contains a string literal that looks like a class selector,
/// e.g. `".planner-form"`.
fn contains_class_selector_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] != b'"' || i + 2 >= bytes.len() {
            continue;
        }
        if bytes[i + 1] != b'.' || !bytes[i + 2].is_ascii_lowercase() {
            continue;
        }
        let rest = &bytes[i + 2..];
        let Some(end) = rest.iter().position(|&b| b == b'"') else {
            continue;
        };
        if rest[..end]
            .iter()
            .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
        {
            return true;
        }
    }
    false
}

/// Whether `s` passes a string literal straight into an element lookup.
fn contains_literal_lookup(s: &str) -> bool {
    LOOKUP_CALLS.iter().any(|call| {
        s.match_indices(call).any(|(i, _)| {
            let after = s[i + call.len()..].trim_start();
            after.starts_with('"') || after.starts_with("document, \"")
        })
    })
}

/// Scan source up to its test module.
fn find_hardcoded_selectors(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }

        if contains_class_selector_literal(line) || contains_literal_lookup(line) {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

#[test]
fn components_take_selectors_from_config() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/components");
    let mut all_violations = Vec::new();

    visit_component_files(&dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found hardcoded DOM selectors in components.\n\
             Add the selector to SiteConfig in src/config.rs and read it from there.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[test]
fn component_sources_exist() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/components");
    let mut count = 0;
    for entry in fs::read_dir(&dir).expect("src/components is readable").flatten() {
        if entry.path().extension().map(|e| e == "rs").unwrap_or(false) {
            count += 1;
        }
    }
    assert!(count >= 5, "expected the component sources, found {count}");
}

fn visit_component_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_component_files(&path, violations);
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            let display_path = path.display().to_string();
            for (line_num, line) in find_hardcoded_selectors(&source) {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_class_selector_literal() {
        let source = r#"let menu = dom::query(document, ".nav-menu");"#;
        assert_eq!(find_hardcoded_selectors(source).len(), 1);
    }

    #[test]
    fn detects_literal_id_lookup() {
        let source = r#"let el = doc.get_element_by_id("people");"#;
        assert_eq!(find_hardcoded_selectors(source).len(), 1);
    }

    #[test]
    fn allows_config_fields() {
        let source = r#"let menu = dom::query(document, &sel.menu_panel);"#;
        assert!(find_hardcoded_selectors(source).is_empty());
    }

    #[test]
    fn ignores_comments_and_tests() {
        let source = "// query(\".nav-link\")\n#[cfg(test)]\nlet x = \".hamburger\";";
        assert!(find_hardcoded_selectors(source).is_empty());
    }

    #[test]
    fn ignores_non_selector_strings() {
        assert!(!contains_class_selector_literal(r#""4.7""#));
        assert!(!contains_class_selector_literal(r#"".""#));
        assert!(!contains_class_selector_literal(r#""Oops!""#));
        assert!(contains_class_selector_literal(r#"".cta-button""#));
    }
}

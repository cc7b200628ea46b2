//! Hygiene: coding standards checked at test time.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that can crash the page
//! or silently swallow failures, and checks that browser bindings stay inside
//! the rendering boundary. Budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().replace('\\', "/");
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Per-file counts of lines containing `pattern`.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize) {
    let found = hits(&source_files(), pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "{pattern} budget exceeded: found {count}, max {max}.\n{listing}");
}

fn is_render_boundary(path: &str) -> bool {
    path.contains("src/dom/") || path.ends_with("src/app.rs")
}

// =============================================================
// Panics
// =============================================================

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", 0);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", 0);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", 0);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", 0);
    assert_budget("unimplemented!(", 0);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", 0);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", 0);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", 0);
}

/// Only the one-shot fallback timer may be detached from `Bindings`.
#[test]
fn forget_budget() {
    assert_budget(".forget()", 1);
}

// =============================================================
// Rendering boundary
// =============================================================

#[test]
fn browser_bindings_stay_in_dom_layer() {
    let files = source_files();
    let leaks: Vec<&str> = files
        .iter()
        .filter(|file| !is_render_boundary(&file.path))
        .filter(|file| {
            file.content.contains("web_sys::")
                || file.content.contains("use web_sys")
                || file.content.contains("js_sys::")
        })
        .map(|file| file.path.as_str())
        .collect();
    assert!(leaks.is_empty(), "browser APIs used outside src/dom and src/app.rs: {leaks:?}");
}

#[test]
fn dom_layer_is_feature_gated() {
    let files = source_files();
    let lib = files
        .iter()
        .find(|file| file.path.ends_with("src/lib.rs"))
        .map(|file| file.content.as_str())
        .unwrap_or_default();
    for module in ["pub mod dom;", "pub mod app;"] {
        let gated = lib
            .lines()
            .zip(lib.lines().skip(1))
            .any(|(attr, line)| attr.contains("cfg(feature = \"browser\")") && line.trim() == module);
        assert!(gated, "{module} must sit behind the browser feature");
    }
}

/// Browser APIs that `web-sys` types are used through those types, not
/// through hand-written `extern` blocks or `Reflect` lookups.
#[test]
fn typed_browser_apis_over_hand_bindings() {
    for pattern in ["js_class = \"PerformanceObserver", "\"readyState\"", "\"entryTypes\""] {
        assert_budget(pattern, 0);
    }
}

// =============================================================
// Test-only surface
// =============================================================

/// The in-memory backend and its accessors exist only for unit tests.
#[test]
fn test_doubles_are_test_only() {
    let files = source_files();
    for (file, item) in [
        ("src/store.rs", "pub struct MemoryStore"),
        ("src/store.rs", "pub fn backend("),
        ("src/theme.rs", "pub fn store("),
        ("src/scroll.rs", "pub fn is_pending("),
        ("src/reveal.rs", "pub fn visible_count("),
    ] {
        let content = files
            .iter()
            .find(|f| f.path.ends_with(file))
            .map(|f| f.content.as_str())
            .unwrap_or_default();
        let lines: Vec<&str> = content.lines().collect();
        let at = lines.iter().position(|line| line.contains(item));
        let gated = at.is_some_and(|i| lines[..i].iter().rev().take(3).any(|line| line.contains("#[cfg(test)]")));
        assert!(gated, "{file}: {item} must be #[cfg(test)]");
    }
}

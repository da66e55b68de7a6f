//! Hygiene: production-source budgets checked at test time.
//!
//! Scans `src/` (skipping `*_test.rs`) for panicking calls and silently
//! discarded results. Fix an existing hit before adding a new one; budgets
//! only go down.
//!
//! The discard budgets cover browser glue where web-sys hands back a
//! `Result` for calls with no useful failure (prompt, dyn casts) and the
//! `cfg(not(feature = "csr"))` stubs that consume unused arguments.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
    Budget { pattern: "let _ =", max: 9 },
    Budget { pattern: ".ok()", max: 8 },
];

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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")), "run from the crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{} budget exceeded: found {count}, max {}\n{detail}", budget.pattern, budget.max));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

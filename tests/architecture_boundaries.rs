use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn rel(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn violations_in(dir: &str, forbidden: &[&str]) -> Vec<String> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join(dir);
    let mut violations = Vec::new();
    for file in rs_files(&root) {
        if file.file_name().and_then(|s| s.to_str()) == Some("tests.rs") {
            continue;
        }
        let content = fs::read_to_string(&file).unwrap_or_default();
        for needle in forbidden {
            if content.contains(needle) {
                violations.push(format!("{} references `{}`", rel(&file), needle));
            }
        }
    }
    violations
}

#[test]
fn sampling_engine_knows_nothing_about_the_terminal() {
    let violations = violations_in(
        "src/system",
        &["ratatui", "crossterm", "crate::ui", "crate::app", "crate::event"],
    );
    assert!(
        violations.is_empty(),
        "System layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn ui_does_not_read_the_process_table() {
    let violations = violations_in(
        "src/ui",
        &["crate::system::procfs", "crate::system::platform", "std::fs"],
    );
    assert!(
        violations.is_empty(),
        "UI/system boundary violations:\n{}",
        violations.join("\n")
    );
}

const OS_CFGS: [&str; 4] = ["cfg(unix)", "cfg(windows)", "target_os", "target_family"];

/// Source before the unit-test module, if the file has one.
fn non_test_code(content: &str) -> &str {
    content.split("#[cfg(test)]").next().unwrap_or(content)
}

#[test]
fn os_cfg_is_scoped_to_system_platform() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let rel_path = rel(&file);
        if rel_path.starts_with("src/system/platform/") {
            continue;
        }
        let content = fs::read_to_string(&file).unwrap_or_default();
        for needle in OS_CFGS {
            if non_test_code(&content).contains(needle) {
                violations.push(format!(
                    "{rel_path} contains `{needle}` but is outside src/system/platform"
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Unexpected OS cfg usage:\n{}",
        violations.join("\n")
    );
}

#[test]
fn platform_module_carries_the_os_cfg() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/system/platform/mod.rs");
    let content = fs::read_to_string(&path).unwrap_or_default();
    assert!(
        OS_CFGS.iter().any(|needle| content.contains(needle)),
        "{} has no OS cfg; the scoping check above would be vacuous",
        rel(&path)
    );
}

//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// List all files in a directory recursively (for failure messages)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that an artifact exists relative to the project root.
///
/// # Example
/// ```ignore
/// assert_artifact!(env, "out/app/Main.out");
/// ```
#[macro_export]
macro_rules! assert_artifact {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.is_file(),
            "Expected artifact at '{}', but it doesn't exist.\n\
             Files found:\n  {}",
            $path,
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that no artifact was written at the path.
#[macro_export]
macro_rules! assert_no_artifact {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.",
            $path
        );
    };
}

/// Assert that a command succeeded, printing its output if not.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

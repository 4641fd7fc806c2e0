//! Scenario: repeated builds reuse fresh artifacts
//!
//! Journey: a developer builds `Main`, which needs `Lib` from the source
//! path, then rebuilds after touching nothing, then after editing `Lib`.

use crate::common::*;
use crate::{assert_artifact, assert_success};

fn lib_artifact(references: &[&str]) -> String {
    serde_json::json!({
        "format": 1,
        "class": "Lib",
        "references": references,
    })
    .to_string()
}

#[test]
fn scenario_newer_artifact_is_reused() {
    let env = TestEnv::new();
    env.write_project_file("Main.src", "class Main uses Lib;");
    env.write_project_file("Lib.src", "class Lib;");
    env.write_project_file("Lib.out", &lib_artifact(&[]));
    env.set_mtime("Lib.src", 10);
    env.set_mtime("Lib.out", 20);

    let result = env.run(&["Main.src"]);

    assert_success!(result);
    assert_artifact!(env, "Main.out");
    // Untouched: not recompiled, not rewritten.
    assert!(env.read_artifact("Lib.out")["references"]
        .as_array()
        .unwrap()
        .is_empty());
    assert_eq!(
        env.mtime("Lib.out"),
        std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_700_000_020)
    );
}

#[test]
fn scenario_newer_source_is_recompiled() {
    let env = TestEnv::new();
    env.write_project_file("Main.src", "class Main uses Lib;");
    env.write_project_file("Lib.src", "class Lib uses Main;");
    env.write_project_file("Lib.out", &lib_artifact(&[]));
    env.set_mtime("Lib.out", 10);
    env.set_mtime("Lib.src", 20);

    let result = env.run(&["Main.src"]);

    assert_success!(result);
    let lib = env.read_artifact("Lib.out");
    assert_eq!(lib["references"][0], "Main");
    assert!(env.mtime("Lib.out") > env.mtime("Lib.src"));
}

#[test]
fn scenario_rebuild_flag_ignores_fresh_artifacts() {
    let env = TestEnv::new();
    env.write_project_file("Main.src", "class Main uses Lib;");
    env.write_project_file("Lib.src", "class Lib uses Main;");
    env.write_project_file("Lib.out", &lib_artifact(&[]));
    env.set_mtime("Lib.src", 10);
    env.set_mtime("Lib.out", 20);

    let result = env.run(&["--rebuild", "Main.src"]);

    assert_success!(result);
    assert_eq!(env.read_artifact("Lib.out")["references"][0], "Main");
}

#[test]
fn scenario_second_build_only_compiles_entry_files() {
    let env = TestEnv::new();
    env.write_project_file("Main.src", "class Main uses Lib;");
    env.write_project_file("Lib.src", "class Lib;");
    env.set_mtime("Lib.src", 10);

    assert_success!(env.run(&["Main.src"]));
    assert_artifact!(env, "Lib.out");

    // Pin the artifact's mtime so a rewrite would be visible.
    env.set_mtime("Lib.out", 30);
    assert_success!(env.run(&["-v", "Main.src"]));

    assert_eq!(
        env.mtime("Lib.out"),
        std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_700_000_030)
    );
}

#[test]
fn scenario_artifact_with_missing_dependency_is_fatal() {
    let env = TestEnv::new();
    env.write_project_file("Main.src", "class Main uses Lib;");
    env.write_project_file("Lib.src", "class Lib;");
    env.write_project_file("Lib.out", &lib_artifact(&["Vanished"]));
    env.set_mtime("Lib.src", 10);
    env.set_mtime("Lib.out", 20);

    let result = env.run(&["Main.src"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("Vanished"),
        "stderr should name the missing class:\n{}",
        result.stderr
    );
}

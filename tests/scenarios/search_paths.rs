//! Scenario: source path, class path, extension and boot directories
//!
//! Sources come from the source path (the class path when unset). Classes
//! with no source are taken from packaged artifacts: boot path first, then
//! every package folder under the extension directories, then the class
//! path.

use crate::common::*;
use crate::{assert_artifact, assert_no_artifact, assert_success};

fn packaged(class: &str) -> String {
    serde_json::json!({ "format": 1, "class": class, "references": [] }).to_string()
}

#[test]
fn scenario_output_root_mirrors_packages() {
    let env = TestEnv::new();
    env.write_project_file("src/app/Main.src", "package app;\nclass Main uses Helper;");
    env.write_project_file("src/app/Helper.src", "package app;\nclass Helper;");

    let result = env.run(&["-d", "out", "--sourcepath", "src", "src/app/Main.src"]);

    assert_success!(result);
    assert_artifact!(env, "out/app/Main.out");
    assert_artifact!(env, "out/app/Helper.out");
    assert_no_artifact!(env, "src/app/Main.out");
    assert_eq!(env.read_artifact("out/app/Main.out")["class"], "app.Main");
}

#[test]
fn scenario_debug_info_controls_artifact_fields() {
    let env = TestEnv::new();
    env.write_project_file("A.src", "// header\nclass A;");

    assert_success!(env.run(&["A.src"]));
    let with_defaults = env.read_artifact("A.out");
    assert_eq!(with_defaults["source"], "A.src");
    assert_eq!(with_defaults["line"], 2);

    assert_success!(env.run(&["--debug", "none", "A.src"]));
    let stripped = env.read_artifact("A.out");
    assert!(stripped.get("source").is_none());
    assert!(stripped.get("line").is_none());
}

#[test]
fn scenario_classes_from_packaged_directories() {
    let env = TestEnv::new();
    env.write_project_file("boot/std/Object.out", &packaged("std.Object"));
    env.write_project_file("ext/collections/coll/List.out", &packaged("coll.List"));
    env.write_project_file("lib/vendor/Json.out", &packaged("vendor.Json"));
    env.write_project_file(
        "src/Main.src",
        "import std.Object;\nimport coll.List;\nimport vendor.Json;\nclass Main uses Object, List, Json;",
    );

    let result = env.run(&[
        "--bootclasspath",
        "boot",
        "--extdirs",
        "ext",
        "--classpath",
        "lib",
        "src/Main.src",
    ]);

    assert_success!(result);
    let main = env.read_artifact("src/Main.out");
    assert_eq!(
        main["references"],
        serde_json::json!(["std.Object", "coll.List", "vendor.Json"])
    );
}

#[test]
fn scenario_reserved_namespace_is_never_compiled_from_source() {
    let env = TestEnv::new();
    // A local source that would shadow the runtime's own class.
    env.write_project_file("std/Object.src", "package std;\nclass Object;");
    env.write_project_file("Main.src", "class Main uses std.Object;");

    let result = env.run(&["Main.src"]);

    assert!(!result.success);
    assert!(result.stderr.contains("cannot resolve class 'std.Object'"));
    assert_no_artifact!(env, "std/Object.out");
}

#[test]
fn scenario_project_config_file() {
    let env = TestEnv::new();
    env.write_project_file(
        "kiln.toml",
        "[output]\ndir = \"build\"\n\n[source]\npath = [\"src\"]\n",
    );
    env.write_project_file("src/Main.src", "class Main uses Lib;");
    env.write_project_file("src/Lib.src", "class Lib;");

    let result = env.run(&["src/Main.src"]);

    assert_success!(result);
    assert_artifact!(env, "build/Main.out");
    assert_artifact!(env, "build/Lib.out");
}

#[test]
fn scenario_explicit_config_and_cli_override() {
    let env = TestEnv::new();
    env.write_project_file("conf/kiln.toml", "[output]\ndir = \"from-config\"\n");
    env.write_project_file("A.src", "class A;");

    let result = env.run(&["--config", "conf/kiln.toml", "-d", "from-cli", "A.src"]);

    assert_success!(result);
    assert_artifact!(env, "from-cli/A.out");
    assert_no_artifact!(env, "from-config");
}

#[test]
fn scenario_user_config_and_unknown_key_warning() {
    let env = TestEnv::new();
    env.write_user_config("[output]\ndri = \"nowhere\"\nstore = false\n");
    env.write_project_file("A.src", "class A;");

    let result = env.run(&["A.src"]);

    assert_success!(result);
    assert!(
        result.stderr.contains("unknown config key 'dri' (did you mean 'dir'?)"),
        "stderr:\n{}",
        result.stderr
    );
    assert_no_artifact!(env, "A.out");
}

#[test]
fn scenario_env_override() {
    let env = TestEnv::new();
    env.write_project_file("A.src", "class A;");

    let result = env.run_with_env(&["A.src"], &[("KILN_OUTPUT_DIR", "env-out")]);

    assert_success!(result);
    assert_artifact!(env, "env-out/A.out");
}

#[test]
fn scenario_latin1_sources() {
    let env = TestEnv::new();
    let path = env.project_path("Caf\u{e9}.src");
    // "class Café;" in ISO-8859-1.
    std::fs::write(&path, b"class Caf\xe9;").unwrap();

    let utf8 = env.run(&["Caf\u{e9}.src"]);
    assert!(!utf8.success);

    let latin1 = env.run(&["--encoding", "ISO-8859-1", "Caf\u{e9}.src"]);
    assert_success!(latin1);
    assert_eq!(env.read_artifact("Caf\u{e9}.out")["class"], "Caf\u{e9}");
}

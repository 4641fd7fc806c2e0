//! Scenario: classes that reference each other
//!
//! Entry files may reference each other because they are all parsed before
//! anything compiles. Sources found only through the source path may too,
//! because discovery queues them instead of compiling them on the spot.

use crate::common::*;
use crate::{assert_artifact, assert_success};

#[test]
fn scenario_mutually_referencing_entry_files() {
    let env = TestEnv::new();
    env.write_project_file("X.src", "class X uses Y;");
    env.write_project_file("Y.src", "class Y uses X;");

    let result = env.run(&["X.src", "Y.src"]);

    assert_success!(result);
    assert_artifact!(env, "X.out");
    assert_artifact!(env, "Y.out");
    assert_eq!(env.read_artifact("X.out")["references"][0], "Y");
    assert_eq!(env.read_artifact("Y.out")["references"][0], "X");
}

#[test]
fn scenario_cycle_reached_only_through_the_source_path() {
    let env = TestEnv::new();
    env.write_project_file("app/Main.src", "package app;\nclass Main uses A;");
    env.write_project_file("app/A.src", "package app;\nclass A uses B;");
    env.write_project_file("app/B.src", "package app;\nclass B uses A;");

    let result = env.run(&["-v", "app/Main.src"]);

    assert_success!(result);
    assert_artifact!(env, "app/Main.out");
    assert_artifact!(env, "app/A.out");
    assert_artifact!(env, "app/B.out");
    assert_eq!(env.read_artifact("app/B.out")["references"][0], "app.A");
}

#[test]
fn scenario_self_reference() {
    let env = TestEnv::new();
    env.write_project_file("Node.src", "class Node uses Node;");

    let result = env.run(&["Node.src"]);

    assert_success!(result);
    assert_eq!(env.read_artifact("Node.out")["references"][0], "Node");
}

//! End-to-end tests that run the `repo_harvest` binary against a scratch
//! working directory laid out like a set of checked-out repositories.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn test_front_repository_is_flattened() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("front/src/App.tsx").write_str("export {}").unwrap();
    temp.child("front/src/App.test.tsx").write_str("it()").unwrap();
    temp.child("front/package.json").write_str("{}").unwrap();

    cargo_bin_cmd!("repo_harvest")
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All files successfully copied to 'project' folder!",
        ))
        .stdout(predicate::str::contains("front"))
        .stderr(predicate::str::contains("Processing repository: front"))
        .stderr(predicate::str::contains("Repository djangoadmin not found, skipping..."));

    temp.child("project/front_App.tsx").assert("export {}");
    temp.child("project/front_package.json").assert("{}");
    temp.child("project/front_App.test.tsx").assert(predicate::path::missing());
    temp.child("project/front_App.test_src.tsx").assert(predicate::path::missing());
}

#[test]
fn test_nested_terraform_module_naming() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("infra/terraform/modules/vpc/main.tf")
        .write_str("module \"vpc\" {}")
        .unwrap();
    temp.child("infra/terraform/.terraform/cache.tf").write_str("x").unwrap();
    temp.child("infra/scripts/bin/deploy.sh").write_str("#!/bin/sh").unwrap();
    temp.child("infra/README.md").write_str("# infra").unwrap();

    cargo_bin_cmd!("repo_harvest")
        .current_dir(temp.path())
        .assert()
        .success();

    temp.child("project/infra_main_modules_vpc.tf")
        .assert("module \"vpc\" {}");
    temp.child("project/infra_README.md").assert("# infra");
    // `bin` is an excluded directory name.
    temp.child("project/infra_deploy_bin.sh")
        .assert(predicate::path::missing());
    // Hidden directories are walked like any other.
    temp.child("project/infra_cache_.terraform.tf").assert("x");
}

#[test]
fn test_rerun_replaces_previous_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("game1/src/main.js").write_str("v1").unwrap();

    cargo_bin_cmd!("repo_harvest")
        .current_dir(temp.path())
        .assert()
        .success();
    temp.child("project/game1_main.js").assert("v1");

    temp.child("game1/src/main.js").write_str("v2").unwrap();
    temp.child("project/leftover.txt").write_str("stale").unwrap();

    cargo_bin_cmd!("repo_harvest")
        .current_dir(temp.path())
        .assert()
        .success();
    temp.child("project/game1_main.js").assert("v2");
    temp.child("project/leftover.txt").assert(predicate::path::missing());
}

#[test]
fn test_custom_output_and_workdir() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("checkouts/djangoadmin/src/views.py")
        .write_str("def index(): pass")
        .unwrap();
    temp.child("checkouts/djangoadmin/manage.py")
        .write_str("#!/usr/bin/env python")
        .unwrap();

    cargo_bin_cmd!("repo_harvest")
        .current_dir(temp.path())
        .args(["-C", "checkouts", "--output", "flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("copied to 'flat' folder"));

    temp.child("checkouts/flat/djangoadmin_views.py")
        .assert(predicate::path::exists());
    temp.child("checkouts/flat/djangoadmin_manage.py")
        .assert(predicate::path::exists());
    temp.child("project").assert(predicate::path::missing());
}

#[test]
fn test_quiet_prints_nothing_even_with_rust_log() {
    let temp = assert_fs::TempDir::new().unwrap();

    cargo_bin_cmd!("repo_harvest")
        .current_dir(temp.path())
        .env("RUST_LOG", "trace")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    temp.child("project").assert(predicate::path::is_dir());
}

//! # CLI Tests
//!
//! End-to-end tests of the `uniqstr` binary: output is plain, one value per
//! line, and failures exit non-zero with a descriptive message on stderr.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{GlobalConfigBuilder, TestEnv};
use predicates::prelude::*;

// =============================================================================
// gen
// =============================================================================

#[test]
fn test_gen_single_value() {
    let env = TestEnv::new();
    env.cmd()
        .args(["gen", "foo"])
        .assert()
        .success()
        .stdout("wfdb6h7odcoiq\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_gen_multiple_values() {
    let env = TestEnv::new();
    env.cmd()
        .args(["gen", "foo", "bar"])
        .assert()
        .success()
        .stdout("eynjfsrwqmkhk\n");
}

#[test]
fn test_gen_requires_a_value() {
    let env = TestEnv::new();
    env.cmd().arg("gen").assert().failure();
}

#[test]
fn test_gen_json_rejects_number() {
    let env = TestEnv::new();
    env.cmd()
        .args(["gen", "--json", "42"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parameter 0 must be a string, got 42"));
}

#[test]
fn test_gen_too_long() {
    let env = TestEnv::new();
    // Two halves plus the separator exceed the limit by one.
    let half = "x".repeat(65_536);
    env.cmd()
        .args(["gen", half.as_str(), half.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("131073"))
        .stderr(predicate::str::contains("131072"));
}

#[test]
fn test_gen_warns_on_non_default_settings() {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().seed(1).color(false).build());
    env.cmd()
        .args(["gen", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wfdb6h7odcoiq").not())
        .stderr(predicate::str::contains("warning:"));
}

#[test]
fn test_gen_verbose_writes_debug_to_stderr() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--verbose", "gen", "foo"])
        .assert()
        .success()
        .stdout("wfdb6h7odcoiq\n")
        .stderr(predicate::str::contains("debug:"));
}

// =============================================================================
// hash / encode / check
// =============================================================================

#[test]
fn test_hash_hex_and_dec() {
    let env = TestEnv::new();
    env.cmd()
        .args(["hash", "foo"])
        .assert()
        .success()
        .stdout("b1461f1fee189c88\n");
    env.cmd()
        .args(["hash", "--format", "dec", "foo"])
        .assert()
        .success()
        .stdout(format!("{}\n", 0xb146_1f1f_ee18_9c88_u64));
}

#[test]
fn test_hash_seed() {
    let env = TestEnv::new();
    env.cmd()
        .args(["hash", "--seed", "1", "foo"])
        .assert()
        .success()
        .stdout("96331b966b4801a5\n");
}

#[test]
fn test_hash_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .args(["hash", "--stdin"])
        .write_stdin("abcdefghi")
        .assert()
        .success()
        .stdout("ca0cd4497e74cdba\n");
}

#[test]
fn test_hash_empty_stdin() {
    let env = TestEnv::new();
    env.cmd()
        .args(["hash", "--stdin"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("0000000000000000\n");
}

#[test]
fn test_encode_values() {
    let env = TestEnv::new();
    env.cmd()
        .args(["encode", "0xb1461f1fee189c88"])
        .assert()
        .success()
        .stdout("wfdb6h7odcoiq\n");
    env.cmd()
        .args(["encode", "0"])
        .assert()
        .success()
        .stdout("aaaaaaaaaaaaa\n");
}

#[test]
fn test_encode_rejects_garbage() {
    let env = TestEnv::new();
    env.cmd()
        .args(["encode", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a 64-bit unsigned value"));
}

#[test]
fn test_check() {
    let env = TestEnv::new();
    env.cmd()
        .args(["check", "wfdb6h7odcoiq"])
        .assert()
        .success();
    env.cmd()
        .args(["check", "WFDB6H7ODCOIQ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a valid identifier"));
}

// =============================================================================
// setup / completions
// =============================================================================

#[test]
fn test_setup_writes_config() {
    let env = TestEnv::new();
    env.cmd()
        .arg("setup")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created global config"));
    assert!(env.global_config_path().exists());
}

#[test]
fn test_completions() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uniqstr"));
}

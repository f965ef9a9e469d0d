// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage output and argument errors.

use crate::prelude::*;

#[test]
fn no_args_prints_usage_and_fails() {
    let project = Project::empty();
    project
        .cb()
        .fails()
        .code_is(1)
        .stdout_has("Usage:")
        .stdout_has("make-iso")
        .stderr_has("ERROR: no command was given");
}

#[test]
fn unknown_action_prints_usage_to_stderr() {
    let project = Project::empty();
    project
        .cb()
        .args(&["bogus"])
        .fails()
        .code_is(1)
        .stdout_lacks("Usage:")
        .stderr_has("Usage:")
        .stderr_has("ERROR: unknown subcommand found");
}

#[test]
fn unknown_flag_is_an_unknown_action() {
    let project = Project::empty();
    project
        .cb()
        .args(&["--fast"])
        .fails()
        .code_is(1)
        .stderr_has("ERROR: unknown subcommand found");
}

#[test]
fn action_names_are_case_sensitive() {
    let project = Project::empty();
    project.cb().args(&["Clean"]).fails().code_is(1);
    assert!(!project.exists("kernel.bin"));
}

#[test]
fn help_lists_every_stage() {
    let run = cli().args(&["--help"]).passes();
    let run = run.stdout_has("Usage: cb [COMMAND]");
    for stage in ["compile", "make-iso", "run-qemu", "clean", "all"] {
        assert!(run.stdout().contains(stage), "help lacks {stage}");
    }
}

#[test]
fn version_shows_package_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn usage_has_no_escapes_when_color_disabled() {
    let project = Project::empty();
    project.cb().fails().stdout_lacks("\x1b[");
}

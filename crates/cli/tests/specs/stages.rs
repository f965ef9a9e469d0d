// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage dispatch against a scratch project.
//!
//! Only stages that need no cross toolchain are run to success here; the
//! rest are checked for how they stop.

use crate::prelude::*;

const CLEAN_LINE: &str = "INFO: rm -rf ./obj ./isodir ./kernel.bin ./AxiomOS.iso";

#[test]
fn clean_on_empty_project_succeeds() {
    let project = Project::empty();
    project
        .cb()
        .args(&["clean"])
        .passes()
        .stderr_has(CLEAN_LINE);
}

#[test]
fn clean_removes_build_outputs_only() {
    let project = Project::empty();
    project
        .file("obj/kmain.o", "")
        .file("isodir/boot/kernel.bin", "")
        .file("kernel.bin", "")
        .file("AxiomOS.iso", "")
        .file("src/loader.asm", "");

    project.cb().args(&["clean"]).passes();

    for gone in ["obj", "isodir", "kernel.bin", "AxiomOS.iso"] {
        assert!(!project.exists(gone), "{gone} survived clean");
    }
    assert!(project.exists("src/loader.asm"));
}

#[test]
fn clean_twice_is_idempotent() {
    let project = Project::empty();
    project.file("kernel.bin", "");
    project.cb().args(&["clean"]).passes();
    project
        .cb()
        .args(&["clean"])
        .passes()
        .stderr_has(CLEAN_LINE);
}

#[test]
fn make_iso_without_kernel_fails_before_running_tools() {
    let project = Project::empty();
    project
        .cb()
        .args(&["make-iso"])
        .fails()
        .code_is(1)
        .stderr_has("ERROR:")
        .stderr_has("kernel.bin")
        .stderr_lacks("grub-mkrescue");
    assert!(!project.exists("isodir"));
}

#[test]
fn run_qemu_without_iso_fails_before_running_tools() {
    let project = Project::empty();
    project
        .cb()
        .args(&["run-qemu"])
        .fails()
        .code_is(1)
        .stderr_has("AxiomOS.iso")
        .stderr_lacks("qemu-system-i386");
}

#[test]
fn compile_creates_object_dir_then_stops_at_first_failure() {
    // Sources are missing, so the assembler either cannot be found or fails.
    let project = Project::empty();
    project
        .cb()
        .args(&["compile"])
        .fails()
        .code_is(1)
        .stderr_has("INFO: mkdir -p ./obj")
        .stderr_has("INFO: nasm -felf32 -o ./obj/loader.o ./src/loader.asm")
        .stderr_has("ERROR:")
        .stderr_lacks("i686-elf-ld");
    assert!(project.exists("obj"));
    assert!(!project.exists("kernel.bin"));
}

#[test]
fn all_stops_after_failed_compile() {
    let project = Project::empty();
    project
        .cb()
        .args(&["all"])
        .fails()
        .code_is(1)
        .stderr_lacks("grub-mkrescue")
        .stderr_lacks("qemu-system-i386");
}

/// Creates the file following `-o`, like the real tools do.
const WRITES_OUTPUT: &str = r#"while [ $# -gt 0 ]; do
  if [ "$1" = "-o" ]; then : > "$2"; fi
  shift
done"#;

fn toolchain_stubs(project: &Project) {
    for tool in ["nasm", "i686-elf-gcc", "i686-elf-ld", "grub-mkrescue"] {
        project.tool(tool, WRITES_OUTPUT);
    }
    project.tool("grub-file", "exit 0");
    project.tool("qemu-system-i386", "exit 0");
}

#[test]
fn failing_tool_reports_pid_and_exit_code() {
    let project = Project::empty();
    project.tool("nasm", "exit 5");

    let run = project.cb().args(&["compile"]).fails().code_is(1);
    let stderr = run.stderr();
    let error = stderr.lines().find(|l| l.starts_with("ERROR:")).unwrap();
    assert!(error.starts_with("ERROR: a child process "), "got: {error}");
    assert!(error.ends_with(" exited with exit code 5"), "got: {error}");
    let pid = error
        .trim_start_matches("ERROR: a child process ")
        .trim_end_matches(" exited with exit code 5");
    assert!(pid.parse::<u32>().is_ok(), "pid: {pid:?}");
    assert!(!stderr.contains("i686-elf-gcc"));
}

#[test]
fn all_runs_every_stage_in_order() {
    let project = Project::empty();
    toolchain_stubs(&project);

    let run = project.cb().args(&["all"]).passes();

    let infos: Vec<String> = run
        .stderr()
        .lines()
        .filter_map(|l| l.strip_prefix("INFO: "))
        .map(|l| l.split_whitespace().next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        infos,
        [
            "mkdir",
            "nasm",
            "i686-elf-gcc",
            "i686-elf-gcc",
            "i686-elf-gcc",
            "i686-elf-ld",
            "grub-file",
            "mkdir",
            "cp",
            "writing",
            "grub-mkrescue",
            "qemu-system-i386",
        ]
    );
    assert!(project.exists("obj/kmain.o"));
    assert!(project.exists("isodir/boot/kernel.bin"));
    let menu = project.read("isodir/boot/grub/grub.cfg");
    assert!(menu.contains("multiboot /boot/kernel.bin"));
    assert!(project.exists("AxiomOS.iso"));
}

#[test]
fn make_iso_after_compile_stages_the_kernel() {
    let project = Project::empty();
    toolchain_stubs(&project);

    project
        .cb()
        .args(&["compile"])
        .passes()
        .stderr_lacks("grub-mkrescue");
    assert!(project.exists("kernel.bin"));

    project
        .cb()
        .args(&["make-iso"])
        .passes()
        .stderr_has("INFO: grub-file --is-x86-multiboot ./kernel.bin")
        .stderr_has("INFO: cp ./kernel.bin ./isodir/boot/kernel.bin")
        .stderr_has("INFO: grub-mkrescue -o ./AxiomOS.iso ./isodir")
        .stderr_lacks("qemu-system-i386");

    project
        .cb()
        .args(&["run-qemu"])
        .passes()
        .stderr_has("INFO: qemu-system-i386 -cdrom ./AxiomOS.iso");
}

#[test]
fn make_iso_refuses_kernel_without_multiboot_header() {
    let project = Project::empty();
    toolchain_stubs(&project);
    project.tool("grub-file", "exit 1");
    project.file("kernel.bin", "");

    project
        .cb()
        .args(&["make-iso"])
        .fails()
        .code_is(1)
        .stderr_has("INFO: grub-file --is-x86-multiboot ./kernel.bin")
        .stderr_has("exited with exit code 1")
        .stderr_lacks("grub-mkrescue");
    assert!(!project.exists("isodir"));
    assert!(!project.exists("AxiomOS.iso"));
}

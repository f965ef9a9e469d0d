// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed project configuration: tool names, source lists and output paths.
//!
//! Paths are plain strings relative to the pipeline's working directory and
//! are passed verbatim to the external tools.

use cb_core::{change_filename, change_prefix, PathError};

/// Name of the bootable image.
pub const ISO_NAME: &str = "AxiomOS.iso";

/// Bootloader menu written into the staging directory.
pub const GRUB_MENU: &str = r#"menuentry "AxiomOS" {
    multiboot /boot/kernel.bin
    boot
}
"#;

/// External tools and their fixed flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub assembler: String,
    /// Instruction set / object format flags for the assembler.
    pub asm_flags: Vec<String>,
    pub c_compiler: String,
    pub c_flags: Vec<String>,
    pub linker: String,
    /// Verifies the linked kernel carries a multiboot header GRUB accepts.
    pub multiboot_checker: String,
    pub multiboot_flags: Vec<String>,
    pub iso_tool: String,
    pub emulator: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            assembler: "nasm".to_string(),
            asm_flags: vec!["-felf32".to_string()],
            c_compiler: "i686-elf-gcc".to_string(),
            c_flags: ["-std=gnu99", "-ffreestanding", "-O2", "-Wall", "-Wextra"]
                .map(String::from)
                .to_vec(),
            linker: "i686-elf-ld".to_string(),
            multiboot_checker: "grub-file".to_string(),
            // v1, matching the `multiboot` command in `GRUB_MENU`
            multiboot_flags: vec!["--is-x86-multiboot".to_string()],
            iso_tool: "grub-mkrescue".to_string(),
            emulator: "qemu-system-i386".to_string(),
        }
    }
}

/// Sources and build artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub asm_sources: Vec<String>,
    pub c_sources: Vec<String>,
    /// Every object file lands directly in this directory.
    pub obj_dir: String,
    pub linker_script: String,
    pub kernel: String,
    pub staging_dir: String,
    pub iso: String,
    pub grub_menu: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            asm_sources: vec!["./src/loader.asm".to_string()],
            c_sources: [
                "./src/kernel/kmain.c",
                "./src/kernel/framebuffer.c",
                "./src/kernel/vga.c",
            ]
            .map(String::from)
            .to_vec(),
            obj_dir: "./obj".to_string(),
            linker_script: "./src/linker.ld".to_string(),
            kernel: "./kernel.bin".to_string(),
            staging_dir: "./isodir".to_string(),
            iso: format!("./{ISO_NAME}"),
            grub_menu: GRUB_MENU.to_string(),
        }
    }
}

impl Layout {
    /// Object file for `source`, e.g. `./src/loader.asm` → `./obj/loader.o`.
    pub fn object_for(&self, source: &str) -> Result<String, PathError> {
        change_filename(&self.obj_dir, source, "o")
    }

    pub fn boot_dir(&self) -> String {
        format!("{}/boot", self.staging_dir)
    }

    pub fn grub_dir(&self) -> String {
        format!("{}/boot/grub", self.staging_dir)
    }

    pub fn grub_cfg(&self) -> String {
        format!("{}/grub.cfg", self.grub_dir())
    }

    /// Where the kernel is copied inside the staging directory.
    pub fn staged_kernel(&self) -> Result<String, PathError> {
        change_prefix(&self.kernel, &self.boot_dir())
    }
}

/// How the independent compile commands are run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompileMode {
    /// One at a time, in source order.
    #[default]
    Sequential,
    /// Spawn all, then wait for all.
    Parallel,
}

/// Everything the pipeline needs to know about the project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub toolchain: Toolchain,
    pub layout: Layout,
    pub compile_mode: CompileMode,
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;

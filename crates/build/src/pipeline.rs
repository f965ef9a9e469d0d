// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The four build stages and their composition.
//!
//! Each stage is a fixed sequence of external commands. The first failing
//! command ends the stage and, through `?`, every stage after it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cb_core::{cmd, report, Command};
use cb_exec::Executor;
use tracing::Instrument;

use crate::error::BuildError;
use crate::layout::{BuildConfig, CompileMode};
use crate::stage::Stage;

/// Commands of the compile stage, computed before anything runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilePlan {
    pub mkdir: Command,
    /// One command per source; independent of each other.
    pub compile: Vec<Command>,
    pub link: Command,
}

/// Runs build stages through an [`Executor`].
pub struct Pipeline<E> {
    exec: E,
    config: BuildConfig,
    workdir: PathBuf,
}

impl<E: Executor> Pipeline<E> {
    pub fn new(exec: E, config: BuildConfig) -> Self {
        Self {
            exec,
            config,
            workdir: PathBuf::from("."),
        }
    }

    /// Directory the layout paths are relative to. Must match the executor's
    /// working directory.
    pub fn workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = dir.into();
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.exec
    }

    /// Run one command-line action.
    pub async fn execute(&self, stage: Stage) -> Result<(), BuildError> {
        match stage {
            Stage::Compile => self.compile().await,
            Stage::Package => self.package().await,
            Stage::Run => self.run().await,
            Stage::Clean => self.clean().await,
            Stage::All => self.all().await,
        }
    }

    /// Build the compile-stage commands, rejecting sources that would share
    /// an object file.
    pub fn compile_plan(&self) -> Result<CompilePlan, BuildError> {
        let tc = &self.config.toolchain;
        let layout = &self.config.layout;

        let mut owners: HashMap<String, &str> = HashMap::new();
        let mut objects = Vec::new();
        let mut compile = Vec::new();

        let sources = layout
            .asm_sources
            .iter()
            .map(|src| (src, true))
            .chain(layout.c_sources.iter().map(|src| (src, false)));

        for (src, is_asm) in sources {
            let obj = layout.object_for(src)?;
            if let Some(first) = owners.insert(obj.clone(), src.as_str()) {
                return Err(BuildError::DuplicateObject {
                    object: obj,
                    first: first.to_string(),
                    second: src.clone(),
                });
            }

            let step = if is_asm {
                Command::new(&tc.assembler).args(&tc.asm_flags)
            } else {
                Command::new(&tc.c_compiler).arg("-c").args(&tc.c_flags)
            };
            compile.push(step.arg("-o").arg(&obj).arg(src));
            objects.push(obj);
        }

        let link = cmd!(
            &tc.linker,
            "-T",
            &layout.linker_script,
            "-o",
            &layout.kernel
        )
        .append(objects);

        Ok(CompilePlan {
            mkdir: cmd!("mkdir", "-p", &layout.obj_dir),
            compile,
            link,
        })
    }

    /// Assemble and compile every source, then link the kernel.
    pub async fn compile(&self) -> Result<(), BuildError> {
        async {
            let plan = self.compile_plan()?;
            tracing::info!(
                objects = plan.compile.len(),
                mode = ?self.config.compile_mode,
                "compiling"
            );

            self.exec.run(plan.mkdir).await?;
            match self.config.compile_mode {
                CompileMode::Sequential => {
                    for step in plan.compile {
                        self.exec.run(step).await?;
                    }
                }
                CompileMode::Parallel => self.exec.run_all(plan.compile).await?,
            }
            self.exec.run(plan.link).await?;
            Ok(())
        }
        .instrument(tracing::info_span!("cb.stage", stage = %Stage::Compile))
        .await
    }

    /// Stage the kernel with a bootloader menu and build the ISO image.
    ///
    /// The kernel must pass the multiboot check before anything is staged.
    pub async fn package(&self) -> Result<(), BuildError> {
        async {
            let tc = &self.config.toolchain;
            let layout = &self.config.layout;
            self.require(&layout.kernel, Stage::Compile)?;

            let check = Command::new(&tc.multiboot_checker)
                .args(&tc.multiboot_flags)
                .arg(&layout.kernel);
            self.exec.run(check).await?;

            let staged = layout.staged_kernel()?;
            self.exec.run(cmd!("mkdir", "-p", layout.grub_dir())).await?;
            self.exec.run(cmd!("cp", &layout.kernel, staged)).await?;
            let cfg = layout.grub_cfg();
            self.write_file(&cfg, &layout.grub_menu).await?;
            let iso = cmd!(&tc.iso_tool, "-o", &layout.iso, &layout.staging_dir);
            self.exec.run(iso).await?;
            Ok(())
        }
        .instrument(tracing::info_span!("cb.stage", stage = %Stage::Package))
        .await
    }

    /// Boot the ISO image in the emulator.
    pub async fn run(&self) -> Result<(), BuildError> {
        async {
            let layout = &self.config.layout;
            self.require(&layout.iso, Stage::Package)?;

            let boot = cmd!(&self.config.toolchain.emulator, "-cdrom", &layout.iso);
            self.exec.run(boot).await?;
            Ok(())
        }
        .instrument(tracing::info_span!("cb.stage", stage = %Stage::Run))
        .await
    }

    /// Remove every build artifact. Absent targets are not an error.
    pub async fn clean(&self) -> Result<(), BuildError> {
        async {
            let layout = &self.config.layout;
            let targets = [
                &layout.obj_dir,
                &layout.staging_dir,
                &layout.kernel,
                &layout.iso,
            ];
            self.exec.run(cmd!("rm", "-rf").args(targets)).await?;
            Ok(())
        }
        .instrument(tracing::info_span!("cb.stage", stage = %Stage::Clean))
        .await
    }

    /// Compile, package and run, stopping at the first failure.
    pub async fn all(&self) -> Result<(), BuildError> {
        self.compile().await?;
        self.package().await?;
        self.run().await
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.workdir.join(Path::new(path))
    }

    fn require(&self, path: &str, producer: Stage) -> Result<(), BuildError> {
        if self.resolve(path).exists() {
            Ok(())
        } else {
            Err(BuildError::MissingArtifact {
                path: path.to_string(),
                stage: producer,
            })
        }
    }

    async fn write_file(&self, path: &str, contents: &str) -> Result<(), BuildError> {
        report::info(format!("writing {path}"));
        let full = self.resolve(path);
        tokio::fs::write(&full, contents)
            .await
            .map_err(|source| BuildError::Io { path: full, source })
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

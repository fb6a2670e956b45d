use std::fmt::Write as _;

use nodeplan_core::layout::{SOURCE_ROOT, app_source_path, output_source_path};
use nodeplan_core::{BuildConfig, ProjectDescriptor};

use crate::preset::{PRESET_ENV, resolve_preset};

/// Label recording where the build left its static output inside the image.
pub const OUTPUT_DIR_LABEL: &str = "nodeplan.output-dir";

/// Logical stages of the generated Dockerfile, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StageKind {
    Base,
    Workdir,
    Install,
    Build,
    Preset,
    Output,
    Start,
}

impl StageKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Workdir => "Workdir",
            Self::Install => "Install",
            Self::Build => "Build",
            Self::Preset => "Preset",
            Self::Output => "Output",
            Self::Start => "Start",
        }
    }
}

/// One rendered stage fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub kind: StageKind,
    pub lines: Vec<String>,
}

/// Generates a Dockerfile for a Node.js (or Bun) project.
///
/// Rendering is pure: the same descriptor and config always give the
/// same text, which keeps upstream build caches stable.
pub struct DockerfileGenerator<'a> {
    config: &'a BuildConfig,
    project: &'a ProjectDescriptor,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(config: &'a BuildConfig, project: &'a ProjectDescriptor) -> Self {
        Self { config, project }
    }

    /// Stages present for this descriptor, in order.
    pub fn stages(&self) -> Vec<Stage> {
        let project = self.project;
        let mut stages = vec![self.base_stage()];

        if let Some(app_dir) = project.app_directory() {
            stages.push(Stage {
                kind: StageKind::Workdir,
                lines: vec![format!("WORKDIR {}", app_source_path(app_dir))],
            });
        }

        stages.push(Stage {
            kind: StageKind::Install,
            lines: vec![project.install_command.clone()],
        });

        if project.has_build_stage() {
            stages.push(Stage {
                kind: StageKind::Build,
                lines: vec![format!("RUN {}", project.build_command)],
            });
        }

        if let Some(preset) = resolve_preset(
            project.framework_id(),
            project.serverless,
            project.alternate_runtime,
        ) {
            stages.push(Stage {
                kind: StageKind::Preset,
                lines: vec![format!("ENV {PRESET_ENV}={preset}")],
            });
        }

        // The output only exists if something built it.
        if project.has_build_stage()
            && let Some(output_dir) = project.output_directory()
        {
            stages.push(Stage {
                kind: StageKind::Output,
                lines: vec![format!(
                    "LABEL {OUTPUT_DIR_LABEL}=\"{}\"",
                    output_source_path(output_dir)
                )],
            });
        }

        if project.has_start_stage() {
            stages.push(Stage {
                kind: StageKind::Start,
                lines: vec![format!("CMD {}", project.start_command)],
            });
        }

        stages
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let stages = self.stages();
        let mut out = String::new();

        for (i, stage) in stages.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            writeln!(out, "# === {} ===", stage.kind.title())?;
            for line in &stage.lines {
                writeln!(out, "{line}")?;
            }
        }

        tracing::debug!(
            stages = ?stages.iter().map(|s| s.kind).collect::<Vec<_>>(),
            framework = self.project.framework_id(),
            "rendered dockerfile"
        );

        Ok(out)
    }

    fn base_stage(&self) -> Stage {
        let mut lines = vec![
            format!("FROM {} AS builder", self.config.base_image(self.project)),
            format!("ENV PORT={}", self.config.port),
        ];

        let mut env: Vec<_> = self.config.env.iter().collect();
        env.sort();
        lines.extend(env.into_iter().map(|(k, v)| format!("ENV {k}={v}")));

        lines.push(format!("WORKDIR {SOURCE_ROOT}"));
        if !self.project.alternate_runtime {
            lines.push("RUN corepack enable".to_owned());
        }
        lines.push("COPY . .".to_owned());

        Stage {
            kind: StageKind::Base,
            lines,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render Dockerfile")]
    Format(#[from] std::fmt::Error),
}

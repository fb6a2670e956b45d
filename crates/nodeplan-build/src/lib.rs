//! Dockerfile generation for Node.js projects.
//!
//! # Stage layout
//!
//! ```text
//! Base      ── FROM node:<version> | bun image, ENV PORT, WORKDIR /src, COPY . .
//! Workdir   ── WORKDIR /src/<app_directory>         (monorepo only)
//! Install   ── install_command, verbatim
//! Build     ── RUN <build_command>                   (non-empty build only)
//! Preset    ── ENV NITRO_PRESET=<preset>            (Nitro frameworks only)
//! Output    ── LABEL nodeplan.output-dir="/src/..." (build + output dir only)
//! Start     ── CMD <start_command>                  (not serverless)
//! ```
//!
//! Each stage sits behind its own guard in [`DockerfileGenerator::stages`];
//! the order never changes.

pub mod dockerfile;
pub mod preset;

pub use dockerfile::{DockerfileGenerator, RenderError, Stage, StageKind};
pub use preset::resolve_preset;

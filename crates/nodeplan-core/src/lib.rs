//! Core types and configuration for nodeplan.
//!
//! This crate defines the `nodeplan.toml` schema ([`NodeplanConfig`]),
//! the resolved [`ProjectDescriptor`], the framework catalogue
//! ([`NodeFramework`]), plan metadata, and the on-disk artifact layout.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod framework;
pub mod layout;
pub mod plan;

pub use config::{BuildConfig, NodeplanConfig};
pub use descriptor::ProjectDescriptor;
pub use error::{Error, Result};
pub use framework::NodeFramework;
pub use plan::{OutputConfig, OutputRoute, PlanMeta, PlanType};

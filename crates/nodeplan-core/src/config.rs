use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ProjectDescriptor;

/// nodeplan.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeplanConfig {
    #[serde(default)]
    pub project: ProjectDescriptor,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Node image repository; the runtime version becomes the tag
    #[serde(default = "default_node_image")]
    pub node_image: String,
    /// Full image reference used when the Bun toolchain is selected
    #[serde(default = "default_bun_image")]
    pub bun_image: String,
    /// Port the application listens on (`ENV PORT`)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Static environment variables baked into the builder stage.
    /// These become ENV directives in the Dockerfile.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            node_image: default_node_image(),
            bun_image: default_bun_image(),
            port: default_port(),
            env: HashMap::new(),
        }
    }
}

impl BuildConfig {
    /// Base image for the builder stage.
    pub fn base_image(&self, project: &ProjectDescriptor) -> String {
        if project.alternate_runtime {
            self.bun_image.clone()
        } else {
            format!("{}:{}", self.node_image, project.runtime_version)
        }
    }
}

impl NodeplanConfig {
    /// Load from nodeplan.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("nodeplan.toml");
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_node_image() -> String {
    "node".to_owned()
}

fn default_bun_image() -> String {
    "oven/bun:1".to_owned()
}

fn default_port() -> u16 {
    8080
}

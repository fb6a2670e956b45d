use serde::{Deserialize, Serialize};

/// Resolved description of a Node.js project, produced by detection.
///
/// The `[project]` table of `nodeplan.toml` deserializes into this type.
/// Empty strings and absent optional fields mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    /// Runtime version used for the Node base image tag (e.g. `"18"`)
    #[serde(default = "default_runtime_version")]
    pub runtime_version: String,
    /// Install step, emitted verbatim (usually starts with `RUN`)
    #[serde(default)]
    pub install_command: String,
    /// Build command; empty means there is no build stage
    #[serde(default)]
    pub build_command: String,
    /// Start command; empty means there is no start stage
    #[serde(default)]
    pub start_command: String,
    /// Monorepo subdirectory holding the app
    #[serde(default)]
    pub app_directory: Option<String>,
    /// Build artifact directory, relative to the source root
    #[serde(default)]
    pub output_directory: Option<String>,
    /// Detected framework identifier
    #[serde(default)]
    pub framework: Option<String>,
    /// Run as a function entry instead of a persistent server
    #[serde(default)]
    pub serverless: bool,
    /// Use the Bun toolchain instead of Node
    #[serde(default)]
    pub alternate_runtime: bool,
}

impl Default for ProjectDescriptor {
    fn default() -> Self {
        Self {
            runtime_version: default_runtime_version(),
            install_command: String::new(),
            build_command: String::new(),
            start_command: String::new(),
            app_directory: None,
            output_directory: None,
            framework: None,
            serverless: false,
            alternate_runtime: false,
        }
    }
}

impl ProjectDescriptor {
    pub fn app_directory(&self) -> Option<&str> {
        non_empty(self.app_directory.as_deref())
    }

    pub fn output_directory(&self) -> Option<&str> {
        non_empty(self.output_directory.as_deref())
    }

    /// Raw framework identifier, `""` when none was detected.
    pub fn framework_id(&self) -> &str {
        self.framework.as_deref().unwrap_or("")
    }

    pub fn has_build_stage(&self) -> bool {
        !self.build_command.is_empty()
    }

    pub fn has_start_stage(&self) -> bool {
        !self.serverless && !self.start_command.is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn default_runtime_version() -> String {
    "18".to_owned()
}

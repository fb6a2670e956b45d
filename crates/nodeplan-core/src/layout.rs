//! Fixed paths shared by the Dockerfile generator and the static transformer.
//!
//! ```text
//! image:    /src/<outputDir>                 ← Node.js plans
//!           /usr/share/nginx/html/static     ← static plans
//! workdir:  .zeabur/output/static/           ← sanitized tree
//!           .zeabur/output/config.json       ← routing config
//! ```
//!
//! Downstream deployers read the workdir paths as-is; do not rename them.

use std::path::{Path, PathBuf};

/// Source root inside the builder image.
pub const SOURCE_ROOT: &str = "/src";

/// Where static plans leave their files inside the image.
pub const STATIC_PLAN_ROOT: &str = "/usr/share/nginx/html/static";

/// Staging directory under the working directory.
pub const STAGING_ROOT: &str = ".zeabur";

/// In-image path of a build artifact directory.
///
/// `dir` is always placed under [`SOURCE_ROOT`]: a leading `/` or `./`
/// does not re-root it, and trailing slashes are dropped.
pub fn output_source_path(dir: &str) -> String {
    let mut rest = dir.trim_matches('/');
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped.trim_start_matches('/');
    }
    if rest.is_empty() || rest == "." {
        SOURCE_ROOT.to_owned()
    } else {
        format!("{SOURCE_ROOT}/{rest}")
    }
}

/// In-image path of the monorepo app directory.
pub fn app_source_path(dir: &str) -> String {
    output_source_path(dir)
}

pub fn staged_output_dir(workdir: &Path) -> PathBuf {
    workdir.join(STAGING_ROOT).join("output")
}

pub fn staged_static_dir(workdir: &Path) -> PathBuf {
    staged_output_dir(workdir).join("static")
}

pub fn staged_config_path(workdir: &Path) -> PathBuf {
    staged_output_dir(workdir).join("config.json")
}

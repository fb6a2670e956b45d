//! Static output staging for deployments that serve files directly.
//!
//! # Transform pipeline
//!
//! ```text
//! transform(image, workdir, meta, plan_type)
//!   1. Resolve   ── static plan: /usr/share/nginx/html/static
//!                   otherwise:   /src/<meta.outputDir>
//!   2. Extract   ── ImageExtractor::copy_from_image → .zeabur/output/static/
//!   3. Sanitize  ── delete dot-prefixed entries at any depth
//!   4. Classify  ── routes::classify(meta.framework) → SPA | MPA
//!   5. Write     ── .zeabur/output/config.json
//! ```
//!
//! Extraction goes through [`DockerExtractor`], which sequences
//! `docker create` / `cp` / `rm -f` over a [`DockerExecutor`].
//!
//! SPA output gets a single catch-all rewrite (`.*` → `/`); MPA output
//! (hexo, vitepress, static Astro and SolidStart) is served as-is.

pub mod extract;
pub mod routes;
pub mod sanitize;
pub mod transform;

pub use extract::{DockerExecutor, DockerExtractor, ExtractError, ImageExtractor, RealExecutor};
pub use routes::{RouteStrategy, classify};
pub use transform::{StaticOutputTransformer, TransformError, transform_static_output};

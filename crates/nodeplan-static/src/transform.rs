use std::path::{Path, PathBuf};

use nodeplan_core::layout::{
    STATIC_PLAN_ROOT, output_source_path, staged_config_path, staged_static_dir,
};
use nodeplan_core::{PlanMeta, PlanType};

use crate::extract::{DockerExtractor, ExtractError, ImageExtractor};
use crate::routes::classify;
use crate::sanitize::{SanitizeError, remove_hidden_entries};

/// Stages the static output of a built image, parameterized over the
/// extractor for testability.
pub struct StaticOutputTransformer<E: ImageExtractor = DockerExtractor> {
    extractor: E,
}

impl StaticOutputTransformer<DockerExtractor> {
    pub fn new() -> Self {
        Self {
            extractor: DockerExtractor::new(),
        }
    }
}

impl Default for StaticOutputTransformer<DockerExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ImageExtractor> StaticOutputTransformer<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    /// Extract, sanitize, and describe the static output of `image`.
    ///
    /// Writes `<workdir>/.zeabur/output/static/` and
    /// `<workdir>/.zeabur/output/config.json`, returning the static dir.
    /// Steps run in order and the first failure aborts; nothing already
    /// written is rolled back, so rerun from a clean workdir.
    pub fn transform(
        &self,
        image: &str,
        workdir: &Path,
        meta: &PlanMeta,
        plan_type: PlanType,
    ) -> Result<PathBuf, TransformError> {
        // 1. Resolve source
        let source = source_path(meta, plan_type);
        let static_dir = staged_static_dir(workdir);
        tracing::debug!(image, %source, %plan_type, "extracting static output");

        // 2. Extract
        std::fs::create_dir_all(&static_dir).map_err(|e| TransformError::CreateDir {
            path: static_dir.clone(),
            source: e,
        })?;
        self.extractor
            .copy_from_image(image, &source, &static_dir)
            .map_err(|e| TransformError::Extract {
                image: image.to_owned(),
                source_path: source.clone(),
                source: e,
            })?;

        // 3. Sanitize
        let removed = remove_hidden_entries(&static_dir)?;
        tracing::debug!(removed, "removed hidden entries from static output");

        // 4. Classify
        let strategy = classify(meta.framework());
        let config = strategy.output_config();

        // 5. Write config
        let config_path = staged_config_path(workdir);
        let bytes = serde_json::to_vec(&config).map_err(TransformError::Serialize)?;
        std::fs::write(&config_path, bytes).map_err(|e| TransformError::WriteConfig {
            path: config_path.clone(),
            source: e,
        })?;

        tracing::info!(
            framework = meta.framework(),
            strategy = ?strategy,
            output = %static_dir.display(),
            "static output staged"
        );
        Ok(static_dir)
    }
}

/// Transform with the docker-backed extractor.
pub fn transform_static_output(
    image: &str,
    workdir: &Path,
    meta: &PlanMeta,
    plan_type: PlanType,
) -> Result<PathBuf, TransformError> {
    StaticOutputTransformer::new().transform(image, workdir, meta, plan_type)
}

/// Where the static files live inside the image.
pub fn source_path(meta: &PlanMeta, plan_type: PlanType) -> String {
    match plan_type {
        PlanType::Static => STATIC_PLAN_ROOT.to_owned(),
        _ => output_source_path(meta.output_dir()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("failed to create staging directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to extract {source_path} from image {image}")]
    Extract {
        image: String,
        source_path: String,
        source: ExtractError,
    },
    #[error("failed to delete hidden entries from static output")]
    Sanitize(#[from] SanitizeError),
    #[error("failed to serialize output config")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write output config {path}")]
    WriteConfig {
        path: PathBuf,
        source: std::io::Error,
    },
}

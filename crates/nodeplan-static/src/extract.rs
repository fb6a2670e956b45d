use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

/// Abstraction over copying files out of a built image, for testability.
///
/// Production code uses [`DockerExtractor`], tests use mockall-generated mocks.
pub trait ImageExtractor {
    /// Copy the contents of `src` inside `image` into the existing
    /// directory `dst`, recursively.
    fn copy_from_image(&self, image: &str, src: &str, dst: &Path) -> Result<(), ExtractError>;
}

/// Abstraction over docker CLI execution for testability.
///
/// Arguments are `OsString` so host paths reach the CLI unmodified.
pub trait DockerExecutor {
    /// Execute a docker command and capture stdout.
    fn exec(&self, args: &[OsString]) -> Result<String, ExtractError>;
}

/// Real docker CLI executor.
pub struct RealExecutor;

impl DockerExecutor for RealExecutor {
    fn exec(&self, args: &[OsString]) -> Result<String, ExtractError> {
        let output = Command::new("docker")
            .args(args)
            .output()
            .map_err(|e| ExtractError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| ExtractError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
            Err(ExtractError::CommandFailed {
                args: args.iter().map(|a| a.to_string_lossy().into_owned()).collect(),
                stderr,
            })
        }
    }
}

/// Extracts through the docker CLI: create a stopped container,
/// `docker cp` out of it, then remove it.
pub struct DockerExtractor<X: DockerExecutor = RealExecutor> {
    executor: X,
}

impl DockerExtractor<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerExtractor<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: DockerExecutor> DockerExtractor<X> {
    pub fn with_executor(executor: X) -> Self {
        Self { executor }
    }
}

impl<X: DockerExecutor> ImageExtractor for DockerExtractor<X> {
    fn copy_from_image(&self, image: &str, src: &str, dst: &Path) -> Result<(), ExtractError> {
        // The command is never run; it only satisfies images without CMD.
        let container_id = self
            .executor
            .exec(&args(["create", image, "sh"]))?
            .trim()
            .to_owned();
        if container_id.is_empty() {
            return Err(ExtractError::NoContainerId {
                image: image.to_owned(),
            });
        }

        // `<src>/.` copies the directory contents rather than the directory itself.
        let source = format!("{container_id}:{}/.", src.trim_end_matches('/'));
        tracing::debug!(image, %source, dst = %dst.display(), "copying from image");
        let mut cp = args(["cp", source.as_str()]);
        cp.push(dst.as_os_str().to_owned());
        let copied = self.executor.exec(&cp);

        // Removal runs whether or not the copy succeeded and never masks its result.
        if let Err(e) = self.executor.exec(&args(["rm", "-f", container_id.as_str()])) {
            tracing::warn!(container = %container_id, error = %e, "failed to remove temporary container");
        }

        copied.map(|_| ())
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<OsString> {
    a.iter().map(|s| OsStr::new(s).to_owned()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("docker CLI not found; install Docker to extract static output")]
    NotFound { source: std::io::Error },

    #[error("docker command failed: {args:?}\n{stderr}")]
    CommandFailed { args: Vec<String>, stderr: String },

    #[error("docker output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },

    #[error("docker create returned no container id for image {image}")]
    NoContainerId { image: String },
}

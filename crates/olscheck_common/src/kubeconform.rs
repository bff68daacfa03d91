//! kubeconform invocation
//!
//! Writes the manifest to a fixed scratch file in the work dir, mounts the
//! work dir at /data and runs the kubeconform image against it.
//! Output is passed back exactly as the process produced it.
//!
//! The scratch file is shared by every call. Only safe while runs stay
//! sequential.

use crate::config::ValidatorConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// Mount point of the work dir inside the container
pub const CONTAINER_MOUNT: &str = "/data";

/// Anything that can schema-check a manifest and return the raw report
pub trait ManifestValidator {
    fn validate(&self, yaml: &str) -> Result<String>;
}

/// Containerized kubeconform
#[derive(Debug, Clone)]
pub struct KubeconformValidator {
    runtime: String,
    image: String,
    work_dir: PathBuf,
    temp_file: String,
}

impl KubeconformValidator {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            runtime: config.runtime.clone(),
            image: config.image.clone(),
            work_dir: config.work_dir.clone(),
            temp_file: config.temp_file.clone(),
        }
    }

    /// Host path of the scratch manifest
    pub fn temp_path(&self) -> PathBuf {
        self.work_dir.join(&self.temp_file)
    }

    /// Arguments after the runtime binary for one validation
    pub fn run_args(&self, host_dir: &Path) -> Vec<String> {
        vec![
            "run".to_string(),
            "--rm".to_string(),
            "-v".to_string(),
            format!("{}:{}", host_dir.display(), CONTAINER_MOUNT),
            self.image.clone(),
            "-summary".to_string(),
            "-output".to_string(),
            "json".to_string(),
            "-strict".to_string(),
            format!("{}/{}", CONTAINER_MOUNT, self.temp_file),
        ]
    }

    /// Pull the kubeconform image
    ///
    /// Best-effort: a failing pull is logged, not returned. Failing to
    /// launch the runtime at all is still an error.
    pub fn pull_image(&self) -> Result<()> {
        info!("Pulling {}", self.image);

        let status = Command::new(&self.runtime)
            .arg("pull")
            .arg(&self.image)
            .status()
            .with_context(|| format!("Failed to launch '{} pull {}'", self.runtime, self.image))?;

        if !status.success() {
            warn!("'{} pull {}' exited with {}", self.runtime, self.image, status);
        }
        Ok(())
    }
}

impl ManifestValidator for KubeconformValidator {
    fn validate(&self, yaml: &str) -> Result<String> {
        let temp_path = self.temp_path();
        fs::write(&temp_path, yaml)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;

        // Bind mounts need an absolute host path
        let host_dir = fs::canonicalize(&self.work_dir)
            .with_context(|| format!("Failed to resolve {}", self.work_dir.display()))?;

        let args = self.run_args(&host_dir);
        debug!("Running {} {}", self.runtime, args.join(" "));

        let output = Command::new(&self.runtime)
            .args(&args)
            .output()
            .with_context(|| format!("Failed to launch {}", self.runtime))?;

        debug!("kubeconform exited with {}", output.status);

        let stream = if output.status.success() {
            &output.stdout
        } else {
            &output.stderr
        };
        Ok(String::from_utf8_lossy(stream).into_owned())
    }
}

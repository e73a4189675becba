//! Skeleton layout configuration.
//! A skeleton may ship a `kiln.json`, `kiln.yml` or `kiln.yaml` file to move
//! the target files around or change the namespace separator. Without one the
//! PHP package layout below is used.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the fixed set of skeleton files live, relative to the skeleton root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkeletonConfig {
    pub manifest: PathBuf,
    pub readme: PathBuf,
    /// Provider class stub, renamed to `<ClassName>.<source_extension>`
    pub provider_stub: PathBuf,
    pub test_case: PathBuf,
    pub example_test: PathBuf,
    pub license: PathBuf,
    pub source_extension: String,
    pub namespace_separator: String,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("composer.json"),
            readme: PathBuf::from("README.md"),
            provider_stub: PathBuf::from("src/ServiceProvider.stub"),
            test_case: PathBuf::from("tests/TestCase.php"),
            example_test: PathBuf::from("tests/ExampleTest.php"),
            license: PathBuf::from("LICENSE.md"),
            source_extension: "php".to_string(),
            namespace_separator: "\\".to_string(),
        }
    }
}

impl SkeletonConfig {
    /// Path the provider stub is renamed to, next to the stub itself.
    pub fn provider_target(&self, class_name: &str) -> PathBuf {
        let file_name = format!("{}.{}", class_name, self.source_extension.trim_start_matches('.'));
        self.provider_stub.with_file_name(file_name)
    }
}

/// Reads the first layout file found in `skeleton_dir`.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the file, `None` if there is none
pub fn load_config<P: AsRef<Path>>(skeleton_dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = skeleton_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return std::fs::read_to_string(&config_path)
                .map(Some)
                .map_err(|e| Error::file(&config_path, e));
        }
    }
    Ok(None)
}

/// Parses layout configuration, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for `SkeletonConfig`
pub fn parse_config(content: &str) -> Result<SkeletonConfig> {
    let config: SkeletonConfig = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))?,
    };

    if config.source_extension.trim_start_matches('.').is_empty() {
        return Err(Error::ConfigError("source_extension cannot be empty".to_string()));
    }
    if config.namespace_separator.is_empty() {
        return Err(Error::ConfigError("namespace_separator cannot be empty".to_string()));
    }

    Ok(config)
}

/// Returns the skeleton layout for `skeleton_dir`, falling back to defaults.
pub fn get_config<P: AsRef<Path>>(skeleton_dir: P) -> Result<SkeletonConfig> {
    match load_config(skeleton_dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => {
            debug!("No layout configuration found, using defaults.");
            Ok(SkeletonConfig::default())
        }
    }
}

// src/config.rs

use color_eyre::eyre::{Result, WrapErr};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Runtime configuration. Everything comes from the environment with dev
/// friendly defaults; there is no config file.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scan backend.
    pub api_base: Url,
    /// Directory vulnerability reports are exported into.
    pub export_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw_base =
            env::var("ARGUS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        let api_base = Url::parse(&raw_base)
            .wrap_err_with(|| format!("ARGUS_API_URL is not a valid URL: {raw_base}"))?;

        let export_dir = env::var("ARGUS_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Ok(Self {
            api_base,
            export_dir,
        })
    }
}

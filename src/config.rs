use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUT_DIR: &str = "./cssgen";
pub const DEFAULT_MODULE: &str = "css";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct GeneratorSection {
    pub out: Option<PathBuf>,
    pub pkg: Option<String>,
    pub strict: Option<bool>,
    pub allow_experimental: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub out: PathBuf,
    pub pkg: String,
    pub strict: bool,
    pub allow_experimental: bool,
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Command line values win over the config file, which wins over defaults.
pub fn resolve_generator(
    config: &Config,
    out: Option<PathBuf>,
    pkg: Option<String>,
    strict: bool,
    allow_experimental: bool,
) -> GeneratorSettings {
    let section = &config.generator;
    GeneratorSettings {
        out: out
            .or_else(|| section.out.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
        pkg: pkg
            .or_else(|| section.pkg.clone())
            .unwrap_or_else(|| DEFAULT_MODULE.to_string()),
        strict: strict || section.strict.unwrap_or(false),
        allow_experimental: allow_experimental || section.allow_experimental.unwrap_or(false),
    }
}

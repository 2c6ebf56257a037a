use colored::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub javadoc_root: Option<String>,
    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,
    #[serde(default)]
    pub graceful: bool,
}

fn default_cache_file() -> PathBuf {
    PathBuf::from("./jpn-cache.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            javadoc_root: None,
            cache_file: default_cache_file(),
            graceful: false,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = PathBuf::from("jpn.toml");

        if config_path.exists() {
            match fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => {
                        return config;
                    }
                    Err(e) => {
                        eprintln!("{} Failed to parse jpn.toml: {}", "⚠️".yellow(), e);
                        eprintln!("   Using default configuration");
                    }
                },
                Err(e) => {
                    eprintln!("{} Failed to read jpn.toml: {}", "⚠️".yellow(), e);
                    eprintln!("   Using default configuration");
                }
            }
        }

        Config::default()
    }
}

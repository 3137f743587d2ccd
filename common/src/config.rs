use serde::Deserialize;
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CommonConfig {
    pub project_name: String,
    /// Directory all model artifact paths are resolved against.
    pub artifacts_dir: String,
}

impl CommonConfig {
    pub fn artifact_path(&self, file: &str) -> PathBuf {
        let file_path = Path::new(file);
        if file_path.is_absolute() || self.artifacts_dir.is_empty() {
            file_path.to_path_buf()
        } else {
            Path::new(&self.artifacts_dir).join(file_path)
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassifierEntry {
    pub name: String,
    pub file: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ModelsConfig {
    pub brand_encoder: String,
    pub classifiers: Vec<ClassifierEntry>,
    pub default_model: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WebuiConfig {
    pub server_address: String,
    pub log_level: String,
    pub allowed_origin: Option<String>,
}

impl Default for WebuiConfig {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:8501".to_string(),
            log_level: "info".to_string(),
            allowed_origin: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PredictConfig {
    pub log_level: String,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub common: CommonConfig,
    pub models: ModelsConfig,
    pub webui: WebuiConfig,
    pub predict: PredictConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let config = serde_yml::from_str(contents)?;

        Ok(config)
    }
}

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

use crate::error::EncodeError;

/// Maps a brand name to the numeric score the classifiers were trained with.
pub trait BrandEncoder: Send + Sync {
    fn encode(&self, brand: &str) -> Result<f64, EncodeError>;
}

/// What a [`TargetEncoder`] does with a category it was not fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    /// Fall back to the prior (global target mean).
    #[default]
    Value,
    Error,
}

fn default_column() -> String {
    "brand".to_string()
}

/// Fitted target encoding: exact-match category lookup with a prior fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetEncoder {
    #[serde(default = "default_column")]
    column: String,
    mapping: HashMap<String, f64>,
    prior: f64,
    #[serde(default)]
    handle_unknown: UnknownPolicy,
}

impl TargetEncoder {
    pub fn new(
        column: impl Into<String>,
        mapping: HashMap<String, f64>,
        prior: f64,
        handle_unknown: UnknownPolicy,
    ) -> Result<Self, EncodeError> {
        let encoder = Self {
            column: column.into(),
            mapping,
            prior,
            handle_unknown,
        };
        encoder.validate()?;
        Ok(encoder)
    }

    pub fn from_json(json: &str) -> Result<Self, EncodeError> {
        let encoder: Self =
            serde_json::from_str(json).map_err(|e| EncodeError::Load(e.to_string()))?;
        encoder.validate()?;
        Ok(encoder)
    }

    pub fn load(path: &Path) -> Result<Self, EncodeError> {
        let json = fs::read_to_string(path)
            .map_err(|e| EncodeError::Load(format!("{}: {}", path.display(), e)))?;
        let encoder = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            categories = encoder.mapping.len(),
            "Loaded target encoder"
        );
        Ok(encoder)
    }

    fn validate(&self) -> Result<(), EncodeError> {
        if !self.prior.is_finite() {
            return Err(EncodeError::Load("prior must be finite".to_string()));
        }
        if let Some((name, _)) = self.mapping.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EncodeError::Load(format!(
                "encoding for '{}' must be finite",
                name
            )));
        }
        Ok(())
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn knows(&self, category: &str) -> bool {
        self.mapping.contains_key(category)
    }
}

impl BrandEncoder for TargetEncoder {
    fn encode(&self, brand: &str) -> Result<f64, EncodeError> {
        if let Some(v) = self.mapping.get(brand) {
            return Ok(*v);
        }
        match self.handle_unknown {
            UnknownPolicy::Value => {
                tracing::debug!(column = %self.column, value = brand, "Unknown category, using prior");
                Ok(self.prior)
            }
            UnknownPolicy::Error => Err(EncodeError::UnknownCategory {
                column: self.column.clone(),
                value: brand.to_string(),
            }),
        }
    }
}

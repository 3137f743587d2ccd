use std::{collections::HashSet, fs, path::Path, sync::Arc};

use common::config::{CommonConfig, ModelsConfig};

use crate::{
    classifier::{Classifier, ModelArtifact},
    encoder::{BrandEncoder, TargetEncoder},
    error::{PredictError, RegistryError},
    model::FeatureSchema,
};

/// Brand encoder plus named classifiers, loaded once at startup.
///
/// Read-only afterwards; share it behind an `Arc`.
pub struct ModelRegistry {
    encoder: Arc<dyn BrandEncoder>,
    models: Vec<(String, Arc<dyn Classifier>)>,
    default_model: String,
}

impl ModelRegistry {
    /// `default_model` of `None` selects the first classifier.
    pub fn new(
        encoder: Arc<dyn BrandEncoder>,
        models: Vec<(String, Arc<dyn Classifier>)>,
        default_model: Option<String>,
        schema: &FeatureSchema,
    ) -> Result<Self, RegistryError> {
        let Some((first_name, _)) = models.first() else {
            return Err(RegistryError::Empty);
        };

        let mut seen = HashSet::new();
        for (name, classifier) in &models {
            if !seen.insert(name.as_str()) {
                return Err(RegistryError::DuplicateModel(name.clone()));
            }
            if let Err(source) = schema.ensure_len(classifier.n_features()) {
                return Err(RegistryError::Schema {
                    model: name.clone(),
                    source,
                });
            }
        }

        let default_model = default_model.unwrap_or_else(|| first_name.clone());
        if !seen.contains(default_model.as_str()) {
            return Err(RegistryError::UnknownDefault(default_model));
        }

        Ok(Self {
            encoder,
            models,
            default_model,
        })
    }

    pub fn load(
        common: &CommonConfig,
        config: &ModelsConfig,
        schema: &FeatureSchema,
    ) -> Result<Self, RegistryError> {
        let encoder_path = common.artifact_path(&config.brand_encoder);
        let encoder: Arc<dyn BrandEncoder> = Arc::new(TargetEncoder::load(&encoder_path)?);

        let mut models: Vec<(String, Arc<dyn Classifier>)> =
            Vec::with_capacity(config.classifiers.len());
        for entry in &config.classifiers {
            let path = common.artifact_path(&entry.file);
            let classifier = load_classifier(&path).map_err(|e| match e {
                RegistryError::Classifier { source, .. } => RegistryError::Classifier {
                    model: entry.name.clone(),
                    source,
                },
                other => other,
            })?;
            tracing::info!(
                model = %entry.name,
                path = %path.display(),
                n_features = classifier.n_features(),
                "Loaded classifier"
            );
            models.push((entry.name.clone(), Arc::from(classifier)));
        }

        let default_model = match config.default_model.trim() {
            "" => None,
            name => Some(name.to_string()),
        };
        let registry = Self::new(encoder, models, default_model, schema)?;
        tracing::info!(
            models = registry.models.len(),
            default = %registry.default_model,
            "Model registry ready"
        );
        Ok(registry)
    }

    /// Names in configured (display) order.
    pub fn names(&self) -> Vec<String> {
        self.models.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn default_name(&self) -> &str {
        &self.default_model
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Classifier>> {
        self.models
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.clone())
    }

    /// The named model, or the default when `name` is `None`.
    pub fn resolve(&self, name: Option<&str>) -> Result<(&str, &dyn Classifier), PredictError> {
        let wanted = name.unwrap_or(&self.default_model);
        self.models
            .iter()
            .find(|(n, _)| n == wanted)
            .map(|(n, c)| (n.as_str(), c.as_ref()))
            .ok_or_else(|| PredictError::UnknownModel(wanted.to_string()))
    }

    pub fn encoder(&self) -> &dyn BrandEncoder {
        self.encoder.as_ref()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

pub fn load_classifier(path: &Path) -> Result<Box<dyn Classifier>, RegistryError> {
    let json = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact = ModelArtifact::from_json(&json).map_err(|source| RegistryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), kind = artifact.kind(), "Parsed model artifact");
    artifact
        .into_classifier()
        .map_err(|source| RegistryError::Classifier {
            model: path.display().to_string(),
            source,
        })
}

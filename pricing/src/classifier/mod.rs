//! Pre-trained binary classifiers, loaded from JSON artifacts.
//!
//! Every artifact carries a `"kind"` tag selecting one of the model families
//! below. Models are immutable after construction and treated as pure
//! functions `FeatureVector -> Label`.

use serde::{Deserialize, Serialize};

use crate::{
    error::ClassifierError,
    model::{FeatureVector, Label},
};

pub mod knn;
pub mod linear;
pub mod tree;
pub mod voting;

pub use knn::{Knn, KnnModel};
pub use linear::{LinearModel, LinearSvm, LogisticRegression};
pub use tree::{BoostedModel, ForestModel, GradientBoosting, RandomForest, Tree, TreeNode};
pub use voting::{VotingClassifier, VotingMode, VotingModel};

pub trait Classifier: Send + Sync {
    /// Width of the input vector the model was trained on.
    fn n_features(&self) -> usize;

    /// Positive-class probability, or `None` when the model has no calibrated output.
    fn predict_proba(&self, x: &FeatureVector) -> Result<Option<f64>, ClassifierError>;

    fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LinearModel),
    LinearSvm(LinearModel),
    Knn(KnnModel),
    RandomForest(ForestModel),
    GradientBoosting(BoostedModel),
    Voting(VotingModel),
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::LogisticRegression(_) => "logistic_regression",
            ModelArtifact::LinearSvm(_) => "linear_svm",
            ModelArtifact::Knn(_) => "knn",
            ModelArtifact::RandomForest(_) => "random_forest",
            ModelArtifact::GradientBoosting(_) => "gradient_boosting",
            ModelArtifact::Voting(_) => "voting",
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_classifier(self) -> Result<Box<dyn Classifier>, ClassifierError> {
        Ok(match self {
            ModelArtifact::LogisticRegression(m) => Box::new(LogisticRegression::new(m)?),
            ModelArtifact::LinearSvm(m) => Box::new(LinearSvm::new(m)?),
            ModelArtifact::Knn(m) => Box::new(Knn::new(m)?),
            ModelArtifact::RandomForest(m) => Box::new(RandomForest::new(m)?),
            ModelArtifact::GradientBoosting(m) => Box::new(GradientBoosting::new(m)?),
            ModelArtifact::Voting(m) => Box::new(VotingClassifier::new(m)?),
        })
    }
}

/// Standardization applied before a model sees the vector: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    pub(crate) fn validate(&self, n_features: usize) -> Result<(), ClassifierError> {
        if self.mean.len() != n_features || self.scale.len() != n_features {
            return Err(ClassifierError::InvalidArtifact(format!(
                "scaler has {}/{} entries for {} features",
                self.mean.len(),
                self.scale.len(),
                n_features
            )));
        }
        ensure_finite("scaler", self.mean.iter().chain(&self.scale))
    }

    pub fn transform(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.mean.iter().zip(&self.scale))
            // zero-variance features were left unscaled at fit time
            .map(|(v, (m, s))| if *s == 0.0 { v - m } else { (v - m) / s })
            .collect()
    }
}

pub(crate) fn check_dims(expected: usize, x: &FeatureVector) -> Result<(), ClassifierError> {
    if x.len() != expected {
        return Err(ClassifierError::DimensionMismatch {
            expected,
            actual: x.len(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_finite<'a>(
    what: &str,
    values: impl IntoIterator<Item = &'a f64>,
) -> Result<(), ClassifierError> {
    if values.into_iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ClassifierError::InvalidArtifact(format!(
            "{} contains non-finite values",
            what
        )))
    }
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

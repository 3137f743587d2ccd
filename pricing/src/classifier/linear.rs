use serde::{Deserialize, Serialize};

use super::{Classifier, Scaler, check_dims, ensure_finite, sigmoid};
use crate::{
    error::ClassifierError,
    model::{FeatureVector, Label},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

impl LinearModel {
    fn validate(&self) -> Result<(), ClassifierError> {
        if self.weights.is_empty() {
            return Err(ClassifierError::InvalidArtifact(
                "linear model has no weights".to_string(),
            ));
        }
        ensure_finite("weights", self.weights.iter().chain([&self.intercept]))?;
        if let Some(scaler) = &self.scaler {
            scaler.validate(self.weights.len())?;
        }
        Ok(())
    }

    /// Signed distance from the separating hyperplane: `w·x + b`.
    pub fn decision_function(&self, x: &FeatureVector) -> Result<f64, ClassifierError> {
        check_dims(self.weights.len(), x)?;
        let dot = match &self.scaler {
            Some(scaler) => dot(&self.weights, &scaler.transform(x.values())),
            None => dot(&self.weights, x.values()),
        };
        Ok(dot + self.intercept)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(a, b)| a * b).sum()
}

pub struct LogisticRegression {
    model: LinearModel,
}

impl LogisticRegression {
    pub fn new(model: LinearModel) -> Result<Self, ClassifierError> {
        model.validate()?;
        Ok(Self { model })
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.model.weights.len()
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<Option<f64>, ClassifierError> {
        Ok(Some(sigmoid(self.model.decision_function(x)?)))
    }

    fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError> {
        let z = self.model.decision_function(x)?;
        Ok(if z > 0.0 {
            Label::Expensive
        } else {
            Label::NotExpensive
        })
    }
}

/// Linear support vector classifier. Uncalibrated: no probabilities.
pub struct LinearSvm {
    model: LinearModel,
}

impl LinearSvm {
    pub fn new(model: LinearModel) -> Result<Self, ClassifierError> {
        model.validate()?;
        Ok(Self { model })
    }
}

impl Classifier for LinearSvm {
    fn n_features(&self) -> usize {
        self.model.weights.len()
    }

    fn predict_proba(&self, _x: &FeatureVector) -> Result<Option<f64>, ClassifierError> {
        Ok(None)
    }

    fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError> {
        let z = self.model.decision_function(x)?;
        Ok(if z > 0.0 {
            Label::Expensive
        } else {
            Label::NotExpensive
        })
    }
}

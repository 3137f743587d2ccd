use serde::{Deserialize, Serialize};

use super::{Classifier, Scaler, check_dims, ensure_finite};
use crate::{
    error::ClassifierError,
    model::{FeatureVector, Label},
};

/// Uniformly weighted k-nearest-neighbours over stored reference points.
///
/// `points` are kept in scaled space; `scaler` only transforms queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnModel {
    pub k: usize,
    pub points: Vec<Vec<f64>>,
    pub labels: Vec<u8>,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

pub struct Knn {
    model: KnnModel,
    n_features: usize,
}

impl Knn {
    pub fn new(model: KnnModel) -> Result<Self, ClassifierError> {
        let invalid = |msg: String| Err(ClassifierError::InvalidArtifact(msg));

        let Some(first) = model.points.first() else {
            return invalid("knn model has no reference points".to_string());
        };
        let n_features = first.len();
        if n_features == 0 {
            return invalid("knn reference points are empty".to_string());
        }
        if model.k == 0 || model.k > model.points.len() {
            return invalid(format!(
                "k = {} must be within 1..={}",
                model.k,
                model.points.len()
            ));
        }
        if model.labels.len() != model.points.len() {
            return invalid(format!(
                "{} labels for {} points",
                model.labels.len(),
                model.points.len()
            ));
        }
        if let Some(bad) = model.labels.iter().find(|l| Label::from_code(**l).is_none()) {
            return invalid(format!("label {} is not 0 or 1", bad));
        }
        if model.points.iter().any(|p| p.len() != n_features) {
            return invalid("knn reference points differ in width".to_string());
        }
        ensure_finite("knn points", model.points.iter().flatten())?;
        if let Some(scaler) = &model.scaler {
            scaler.validate(n_features)?;
        }
        Ok(Self { model, n_features })
    }

    /// Labels of the k nearest points; equal distances keep stored order.
    fn neighbour_labels(&self, x: &FeatureVector) -> Result<Vec<u8>, ClassifierError> {
        check_dims(self.n_features, x)?;
        let query = match &self.model.scaler {
            Some(scaler) => scaler.transform(x.values()),
            None => x.values().to_vec(),
        };

        let mut distances: Vec<(f64, usize)> = self
            .model
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let d: f64 = p.iter().zip(&query).map(|(a, b)| (a - b) * (a - b)).sum();
                (d, i)
            })
            .collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        Ok(distances
            .iter()
            .take(self.model.k)
            .map(|(_, i)| self.model.labels[*i])
            .collect())
    }
}

impl Classifier for Knn {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<Option<f64>, ClassifierError> {
        let labels = self.neighbour_labels(x)?;
        let positives = labels.iter().filter(|l| **l == 1).count();
        Ok(Some(positives as f64 / labels.len() as f64))
    }

    fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError> {
        let labels = self.neighbour_labels(x)?;
        let positives = labels.iter().filter(|l| **l == 1).count();
        // vote ties resolve to class 0
        Ok(if positives * 2 > labels.len() {
            Label::Expensive
        } else {
            Label::NotExpensive
        })
    }
}

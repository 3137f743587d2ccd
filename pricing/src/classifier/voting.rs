use serde::{Deserialize, Serialize};

use super::{Classifier, ModelArtifact, check_dims};
use crate::{
    error::ClassifierError,
    model::{FeatureVector, Label},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingMode {
    /// Weighted mean of member probabilities.
    Soft,
    /// Weighted majority of member labels.
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotingModel {
    pub voting: VotingMode,
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    pub estimators: Vec<ModelArtifact>,
}

pub struct VotingClassifier {
    voting: VotingMode,
    weights: Vec<f64>,
    members: Vec<Box<dyn Classifier>>,
    n_features: usize,
}

impl VotingClassifier {
    pub fn new(model: VotingModel) -> Result<Self, ClassifierError> {
        let members = model
            .estimators
            .into_iter()
            .map(ModelArtifact::into_classifier)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_members(model.voting, model.weights, members)
    }

    pub fn from_members(
        voting: VotingMode,
        weights: Option<Vec<f64>>,
        members: Vec<Box<dyn Classifier>>,
    ) -> Result<Self, ClassifierError> {
        let invalid = |msg: String| Err(ClassifierError::InvalidArtifact(msg));

        let Some(first) = members.first() else {
            return invalid("voting ensemble has no estimators".to_string());
        };
        let n_features = first.n_features();
        if let Some(m) = members.iter().find(|m| m.n_features() != n_features) {
            return invalid(format!(
                "estimators disagree on input width ({} vs {})",
                n_features,
                m.n_features()
            ));
        }

        let weights = weights.unwrap_or_else(|| vec![1.0; members.len()]);
        if weights.len() != members.len() {
            return invalid(format!(
                "{} weights for {} estimators",
                weights.len(),
                members.len()
            ));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) || weights.iter().sum::<f64>() <= 0.0
        {
            return invalid("weights must be non-negative with a positive sum".to_string());
        }

        Ok(Self {
            voting,
            weights,
            members,
            n_features,
        })
    }

    fn soft_probability(&self, x: &FeatureVector) -> Result<f64, ClassifierError> {
        let mut weighted = 0.0;
        for (member, weight) in self.members.iter().zip(&self.weights) {
            let p = member.predict_proba(x)?.ok_or_else(|| {
                ClassifierError::ProbabilityUnavailable("soft voting member".to_string())
            })?;
            weighted += weight * p;
        }
        Ok(weighted / self.weights.iter().sum::<f64>())
    }
}

impl Classifier for VotingClassifier {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<Option<f64>, ClassifierError> {
        check_dims(self.n_features, x)?;
        match self.voting {
            VotingMode::Soft => self.soft_probability(x).map(Some),
            VotingMode::Hard => Ok(None),
        }
    }

    fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError> {
        check_dims(self.n_features, x)?;
        match self.voting {
            VotingMode::Soft => Ok(Label::from_probability(self.soft_probability(x)?)),
            VotingMode::Hard => {
                let (mut positive, mut negative) = (0.0, 0.0);
                for (member, weight) in self.members.iter().zip(&self.weights) {
                    match member.predict(x)? {
                        Label::Expensive => positive += weight,
                        Label::NotExpensive => negative += weight,
                    }
                }
                Ok(if positive > negative {
                    Label::Expensive
                } else {
                    Label::NotExpensive
                })
            }
        }
    }
}

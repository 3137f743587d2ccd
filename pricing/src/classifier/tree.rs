use serde::{Deserialize, Serialize};

use super::{Classifier, check_dims, ensure_finite, sigmoid};
use crate::{
    error::ClassifierError,
    model::{FeatureVector, Label},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go `left` when `x[feature] <= threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Flat node array; node 0 is the root and children always follow their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    fn validate(&self, n_features: usize) -> Result<(), ClassifierError> {
        let invalid = |msg: String| Err(ClassifierError::InvalidArtifact(msg));
        if self.nodes.is_empty() {
            return invalid("tree has no nodes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return invalid(format!("node {} splits on feature {}", i, feature));
                    }
                    if !threshold.is_finite() {
                        return invalid(format!("node {} has a non-finite threshold", i));
                    }
                    for child in [left, right] {
                        if *child <= i || *child >= self.nodes.len() {
                            return invalid(format!("node {} points to node {}", i, child));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return invalid(format!("leaf {} is not finite", i));
                    }
                }
            }
        }
        Ok(())
    }

    fn leaves(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            TreeNode::Leaf { value } => Some(*value),
            TreeNode::Split { .. } => None,
        })
    }

    pub fn evaluate(&self, x: &[f64]) -> f64 {
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if x[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

fn validate_trees(trees: &[Tree], n_features: usize) -> Result<(), ClassifierError> {
    if n_features == 0 {
        return Err(ClassifierError::InvalidArtifact(
            "n_features must be positive".to_string(),
        ));
    }
    if trees.is_empty() {
        return Err(ClassifierError::InvalidArtifact(
            "ensemble has no trees".to_string(),
        ));
    }
    trees.iter().try_for_each(|t| t.validate(n_features))
}

/// Leaves hold positive-class probabilities; the forest averages them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub n_features: usize,
    pub trees: Vec<Tree>,
}

pub struct RandomForest {
    model: ForestModel,
}

impl RandomForest {
    pub fn new(model: ForestModel) -> Result<Self, ClassifierError> {
        validate_trees(&model.trees, model.n_features)?;
        if model
            .trees
            .iter()
            .flat_map(Tree::leaves)
            .any(|v| !(0.0..=1.0).contains(&v))
        {
            return Err(ClassifierError::InvalidArtifact(
                "forest leaves must be probabilities".to_string(),
            ));
        }
        Ok(Self { model })
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.model.n_features
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<Option<f64>, ClassifierError> {
        check_dims(self.model.n_features, x)?;
        let total: f64 = self.model.trees.iter().map(|t| t.evaluate(x.values())).sum();
        Ok(Some(total / self.model.trees.len() as f64))
    }

    fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError> {
        let p = self.predict_proba(x)?.unwrap_or_default();
        Ok(Label::from_probability(p))
    }
}

/// Additive log-odds model: `init + learning_rate * sum(leaf values)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostedModel {
    pub n_features: usize,
    pub init: f64,
    pub learning_rate: f64,
    pub trees: Vec<Tree>,
}

pub struct GradientBoosting {
    model: BoostedModel,
}

impl GradientBoosting {
    pub fn new(model: BoostedModel) -> Result<Self, ClassifierError> {
        validate_trees(&model.trees, model.n_features)?;
        ensure_finite("boosting parameters", [&model.init, &model.learning_rate])?;
        Ok(Self { model })
    }

    pub fn decision_function(&self, x: &FeatureVector) -> Result<f64, ClassifierError> {
        check_dims(self.model.n_features, x)?;
        let sum: f64 = self.model.trees.iter().map(|t| t.evaluate(x.values())).sum();
        Ok(self.model.init + self.model.learning_rate * sum)
    }
}

impl Classifier for GradientBoosting {
    fn n_features(&self) -> usize {
        self.model.n_features
    }

    fn predict_proba(&self, x: &FeatureVector) -> Result<Option<f64>, ClassifierError> {
        Ok(Some(sigmoid(self.decision_function(x)?)))
    }

    fn predict(&self, x: &FeatureVector) -> Result<Label, ClassifierError> {
        let p = sigmoid(self.decision_function(x)?);
        Ok(Label::from_probability(p))
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::SchemaError;

/// Ordered feature slot names, exactly as the classifiers were trained on.
///
/// Names are unique. Length and order are fixed once the schema is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    pub fn new<I, S>(names: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::Duplicate(name.clone()));
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn ensure_len(&self, expected: usize) -> Result<(), SchemaError> {
        if self.len() == expected {
            return Ok(());
        }
        Err(SchemaError::Mismatch {
            expected,
            actual: self.len(),
            missing: Vec::new(),
            unexpected: Vec::new(),
        })
    }

    /// Fails unless `self` has exactly the names of `expected`, in the same order.
    pub fn ensure_matches(&self, expected: &FeatureSchema) -> Result<(), SchemaError> {
        if self.names == expected.names {
            return Ok(());
        }
        let ours: HashSet<&str> = self.iter().collect();
        let theirs: HashSet<&str> = expected.iter().collect();
        Err(SchemaError::Mismatch {
            expected: expected.len(),
            actual: self.len(),
            missing: expected
                .iter()
                .filter(|n| !ours.contains(n))
                .map(str::to_owned)
                .collect(),
            unexpected: self
                .iter()
                .filter(|n| !theirs.contains(n))
                .map(str::to_owned)
                .collect(),
        })
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = SchemaError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        FeatureSchema::new(names)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.names
    }
}

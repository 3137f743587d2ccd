use serde::Serialize;

use super::FeatureSchema;

/// Classifier input, positionally aligned to a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Value of the slot called `name` in `schema`.
    pub fn value_of(&self, schema: &FeatureSchema, name: &str) -> Option<f64> {
        schema.position(name).and_then(|i| self.get(i))
    }

    /// Slot names in `schema` whose value is non-zero, in schema order.
    pub fn active_slots<'a>(&self, schema: &'a FeatureSchema) -> Vec<&'a str> {
        schema
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| **v != 0.0)
            .map(|(name, _)| name)
            .collect()
    }
}

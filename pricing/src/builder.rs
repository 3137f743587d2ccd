use std::{collections::HashMap, hash::Hash, marker::PhantomData};

use crate::{
    error::SchemaError,
    model::{FeatureSchema, FeatureVector, Featurizable},
};

/// Typed slot key -> schema position, computed once per schema.
#[derive(Debug, Clone)]
pub struct SlotTable<K> {
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> SlotTable<K> {
    /// Keys whose name is not in `schema` are left unbound.
    pub fn new(schema: &FeatureSchema, keys: impl IntoIterator<Item = (K, String)>) -> Self {
        let positions: HashMap<&str, usize> =
            schema.iter().enumerate().map(|(i, n)| (n, i)).collect();
        let index = keys
            .into_iter()
            .filter_map(|(key, name)| positions.get(name.as_str()).map(|&i| (key, i)))
            .collect();
        Self { index }
    }

    pub fn slot(&self, key: K) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// Number of keys bound to a schema position.
    pub fn bound(&self) -> usize {
        self.index.len()
    }
}

/// Reusable record -> [`FeatureVector`] assembler for one schema.
pub struct FeatureVectorBuilder<R: Featurizable> {
    schema: FeatureSchema,
    table: SlotTable<R::Key>,
    _record: PhantomData<fn(&R)>,
}

impl<R: Featurizable> FeatureVectorBuilder<R> {
    pub fn new(schema: FeatureSchema) -> Self {
        let table = SlotTable::new(&schema, R::slot_keys());
        if table.bound() < schema.len() {
            tracing::debug!(
                slots = schema.len(),
                bound = table.bound(),
                "Some schema slots have no record key and will always be zero"
            );
        }
        Self {
            schema,
            table,
            _record: PhantomData,
        }
    }

    /// Like [`FeatureVectorBuilder::new`], but fails fast unless `schema`
    /// is exactly `expected`.
    pub fn with_expected(
        schema: FeatureSchema,
        expected: &FeatureSchema,
    ) -> Result<Self, SchemaError> {
        schema.ensure_matches(expected)?;
        Ok(Self::new(schema))
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn slots(&self) -> &SlotTable<R::Key> {
        &self.table
    }

    pub fn build(&self, record: &R) -> FeatureVector {
        let mut values = vec![0.0; self.schema.len()];
        for (key, value) in record.features() {
            // Unbound keys (including selections the schema does not list) are no-ops.
            if let Some(i) = self.table.slot(key) {
                values[i] = value.as_f64();
            }
        }
        FeatureVector::from_values(values)
    }
}

impl<R: Featurizable> Clone for FeatureVectorBuilder<R> {
    fn clone(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            table: self.table.clone(),
            _record: PhantomData,
        }
    }
}

/// One-shot form of [`FeatureVectorBuilder::build`].
pub fn build_feature_vector<R: Featurizable>(raw: &R, schema: &FeatureSchema) -> FeatureVector {
    FeatureVectorBuilder::<R>::new(schema.clone()).build(raw)
}

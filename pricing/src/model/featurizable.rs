use std::{fmt::Debug, hash::Hash};
use strum::IntoEnumIterator;

use super::FeatureValue;

/// A record that can be laid out as a classifier feature vector.
///
/// Keys are typed slot identifiers. Slot names are only produced by
/// [`Featurizable::slot_keys`], which the builder calls once when it binds
/// keys to schema positions.
pub trait Featurizable {
    type Key: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Every key this record type can emit, paired with its schema slot name.
    fn slot_keys() -> Vec<(Self::Key, String)>;

    /// This record's values. One-hot axes emit their selected key only.
    fn features(&self) -> Vec<(Self::Key, FeatureValue)>;
}

/// A categorical enum expanded into `PREFIX + label` indicator slots.
pub trait OneHotAxis: Copy + Eq + Hash + IntoEnumIterator + AsRef<str> + 'static {
    const PREFIX: &'static str;

    fn slot_name(self) -> String {
        format!("{}{}", Self::PREFIX, self.as_ref())
    }

    /// One key per variant, wrapped into the record's key type.
    fn one_hot_keys<K>(wrap: impl Fn(Self) -> K) -> Vec<(K, String)> {
        Self::iter().map(|v| (wrap(v), v.slot_name())).collect()
    }
}

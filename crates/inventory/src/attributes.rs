//! Named numeric magnitudes carried by items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gearbag_core::ValueObject;

pub const DAMAGE: &str = "Damage";
pub const WEIGHT: &str = "Weight";
pub const DEFENSE: &str = "Defense";
pub const HEAL: &str = "Heal";

/// Attribute name → magnitude.
///
/// Callers only ever see `&Attributes`, which exposes no mutators; writes
/// are limited to construction and the clone-then-upgrade path in this crate.
/// Keys iterate in sorted order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, f64>);

impl ValueObject for Attributes {}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Magnitude of `key`, or `default` when the item does not carry it.
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Adds `increment` to `key`, starting from zero when the key is absent.
    pub(crate) fn add(&mut self, key: &str, increment: f64) {
        *self.0.entry(key.to_string()).or_insert(0.0) += increment;
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl core::fmt::Display for Attributes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        Ok(())
    }
}

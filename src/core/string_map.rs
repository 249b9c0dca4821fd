use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Value;

/// Categorical encoding: each distinct string gets a 1-based position in
/// first-seen order.
///
/// A map is never empty. Sources that yield no strings produce `None` from
/// [`StringMap::from_strings`], which callers treat as "no categorical
/// handling" rather than as a map without entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringMap {
    positions: IndexMap<String, u32>,
}

impl StringMap {
    /// Deduplicates `strings` preserving first occurrence.
    pub fn from_strings<I, S>(strings: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positions = IndexMap::new();
        for string in strings {
            let next = positions.len() as u32 + 1;
            positions.entry(string.into()).or_insert(next);
        }

        if positions.is_empty() {
            None
        } else {
            Some(Self { positions })
        }
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<u32> {
        self.positions.get(name).copied()
    }

    /// Maps `value` when it is a known string.
    #[must_use]
    pub fn map_value(&self, value: &Value) -> Option<f64> {
        value
            .as_text()
            .and_then(|text| self.position(text))
            .map(f64::from)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.positions
            .iter()
            .map(|(name, position)| (name.as_str(), *position))
    }

    /// Positions in map iteration order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.positions.values().copied().map(f64::from).collect()
    }

    /// Names ordered by ascending position.
    #[must_use]
    pub fn names_by_position(&self) -> Vec<&str> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by_key(|(_, position)| *position);
        entries.into_iter().map(|(name, _)| name).collect()
    }

    /// Tick label table indexed by position: names by position with one
    /// empty entry reserved at each end.
    #[must_use]
    pub fn padded_tick_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.len() + 2);
        names.push(String::new());
        names.extend(self.names_by_position().into_iter().map(str::to_owned));
        names.push(String::new());
        names
    }
}

//! Typed shapes produced by the field extractors.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One row of a ranked table such as `"1 5.763 x Monteur"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub label: String,
    pub count: u64,
}

/// A label paired with the share of vacancies that mention it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledPercentage {
    pub label: String,
    pub percentage: u32,
}

impl LabelledPercentage {
    pub fn new(label: impl Into<String>, percentage: u32) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }
}

/// Annual salary per experience level, in whole euros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBands {
    #[serde(default)]
    pub junior: Option<u64>,
    #[serde(default)]
    pub medior: Option<u64>,
    #[serde(default)]
    pub senior: Option<u64>,
    #[serde(default)]
    pub median: Option<u64>,
}

impl SalaryBands {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.junior.is_none()
            && self.medior.is_none()
            && self.senior.is_none()
            && self.median.is_none()
    }
}

/// Average number of days a vacancy stays open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeToFill {
    #[serde(default)]
    pub intermediary_days: Option<u32>,
    #[serde(default)]
    pub direct_days: Option<u32>,
}

impl TimeToFill {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intermediary_days.is_none() && self.direct_days.is_none()
    }
}

/// Label → percent mapping that remembers insertion order.
///
/// Re-inserting an existing label overwrites its value in place, so the
/// first-seen position is kept. Serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PercentageMap(Vec<(String, u32)>);

impl PercentageMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, percentage: u32) {
        let label = label.into();
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == label) {
            slot.1 = percentage;
        } else {
            self.0.push((label, percentage));
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, pct)| *pct)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(label, pct)| (label.as_str(), *pct))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for PercentageMap {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (label, pct) in iter {
            map.insert(label, pct);
        }
        map
    }
}

impl Serialize for PercentageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, pct) in &self.0 {
            map.serialize_entry(label, pct)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PercentageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PercentageMapVisitor;

        impl<'de> Visitor<'de> for PercentageMapVisitor {
            type Value = PercentageMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of label to integer percentage")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = PercentageMap::new();
                while let Some((label, pct)) = access.next_entry::<String, u32>()? {
                    map.insert(label, pct);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(PercentageMapVisitor)
    }
}

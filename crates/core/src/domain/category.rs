use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::catalogue::CategoryKey;

/// Display data for one recommendable outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMetadata {
    pub key: CategoryKey,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl CategoryMetadata {
    pub fn new(key: impl Into<CategoryKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: String::new(),
            description: String::new(),
            features: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

/// Static lookup from category key to display data, keyed on `CategoryMetadata::key`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryTable {
    entries: IndexMap<CategoryKey, CategoryMetadata>,
}

impl CategoryTable {
    pub fn new(entries: Vec<CategoryMetadata>) -> Self {
        entries.into_iter().collect()
    }

    pub fn get(&self, key: &str) -> Option<&CategoryMetadata> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryMetadata> {
        self.entries.values()
    }
}

impl FromIterator<CategoryMetadata> for CategoryTable {
    fn from_iter<T: IntoIterator<Item = CategoryMetadata>>(iter: T) -> Self {
        let entries = iter.into_iter().map(|metadata| (metadata.key.clone(), metadata)).collect();
        Self { entries }
    }
}

impl Serialize for CategoryTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de> Deserialize<'de> for CategoryTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<CategoryMetadata>::deserialize(deserializer).map(Self::new)
    }
}

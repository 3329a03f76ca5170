//! Serializable snapshot of the icon table.
//!
//! The rendering layer lives outside this crate, so the table is exported
//! as JSON for it to consume.

use serde::Serialize;

use super::resolver::IconMap;
use super::types::{IconCategory, IconIdentifier, IconKey};

/// One row of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Semantic key
    pub key: IconKey,
    /// Icon set component name
    pub identifier: IconIdentifier,
    /// Kebab-case asset name
    pub slug: String,
    /// Key category
    pub category: IconCategory,
}

/// The full icon table in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconManifest {
    icons: Vec<ManifestEntry>,
}

impl IconManifest {
    /// Capture every entry of a table.
    pub fn from_map(map: &IconMap) -> Self {
        let icons = map
            .iter()
            .map(|(key, identifier)| ManifestEntry {
                key,
                identifier,
                slug: identifier.slug(),
                category: key.category(),
            })
            .collect();
        Self { icons }
    }

    /// Get the entries.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.icons
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for IconManifest {
    fn default() -> Self {
        Self::from_map(&super::resolver::ICON_MAP)
    }
}

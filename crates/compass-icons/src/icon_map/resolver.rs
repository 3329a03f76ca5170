//! Icon name resolution.
//!
//! This module provides the static [`IconMap`] and the [`IconNameResolver`]
//! that translates semantic keys into icon-set identifiers.

use super::types::{IconIdentifier, IconKey};

/// The process-wide icon table.
pub static ICON_MAP: IconMap = IconMap::new();

/// Immutable mapping from every [`IconKey`] to its [`IconIdentifier`].
///
/// The table is built at compile time from an exhaustive match, so adding a
/// key without an identifier fails to build.
#[derive(Debug)]
pub struct IconMap {
    entries: [(IconKey, IconIdentifier); IconKey::ALL.len()],
}

impl IconMap {
    const fn new() -> Self {
        let mut entries = [(IconKey::Back, IconIdentifier::new("")); IconKey::ALL.len()];
        let mut i = 0;
        while i < IconKey::ALL.len() {
            let key = IconKey::ALL[i];
            entries[i] = (key, Self::identifier_for(key));
            i += 1;
        }
        Self { entries }
    }

    const fn identifier_for(key: IconKey) -> IconIdentifier {
        match key {
            IconKey::Back => IconIdentifier::new("ArrowLeft"),
            IconKey::AlertSuccess => IconIdentifier::new("CircleCheck"),
            IconKey::AlertError => IconIdentifier::new("CircleAlert"),
            IconKey::AlertWarning => IconIdentifier::new("TriangleAlert"),
            IconKey::AlertInfo => IconIdentifier::new("Info"),
        }
    }

    /// Get the identifier for a key.
    pub const fn get(&self, key: IconKey) -> IconIdentifier {
        Self::identifier_for(key)
    }

    /// Iterate over all entries in key declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (IconKey, IconIdentifier)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the table covers every key.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolver from semantic icon names to icon-set identifiers.
///
/// The resolver borrows the static [`ICON_MAP`]; it is `Copy` and can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct IconNameResolver {
    map: &'static IconMap,
}

impl IconNameResolver {
    /// Create a resolver over the global icon table.
    pub fn new() -> Self {
        Self { map: &ICON_MAP }
    }

    /// Get the underlying table.
    pub fn map(&self) -> &'static IconMap {
        self.map
    }

    /// Resolve a key to its identifier.
    pub fn resolve(&self, key: IconKey) -> IconIdentifier {
        self.map.get(key)
    }

    /// Resolve a key given by name.
    ///
    /// Returns [`Error::UnknownIconKey`](crate::Error::UnknownIconKey) when
    /// `name` is not one of the known keys.
    pub fn lookup(&self, name: &str) -> crate::Result<IconIdentifier> {
        match name.parse::<IconKey>() {
            Ok(key) => Ok(self.resolve(key)),
            Err(e) => {
                tracing::debug!("Unknown icon key: {}", name);
                Err(e)
            }
        }
    }

    /// Check whether a name is a known key.
    pub fn contains(&self, name: &str) -> bool {
        name.parse::<IconKey>().is_ok()
    }

    /// Iterate over all entries.
    pub fn entries(&self) -> impl Iterator<Item = (IconKey, IconIdentifier)> + '_ {
        self.map.iter()
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always false; the table covers every key.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for IconNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a key using the global table.
pub fn resolve(key: IconKey) -> IconIdentifier {
    ICON_MAP.get(key)
}

/// Resolve a key given by name using the global table.
pub fn lookup_icon(name: &str) -> crate::Result<IconIdentifier> {
    IconNameResolver::new().lookup(name)
}

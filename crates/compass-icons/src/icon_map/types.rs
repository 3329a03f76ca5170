//! Core types for the icon map.
//!
//! This module provides:
//! - [`IconKey`], the closed set of semantic icon names used by the app
//! - [`IconCategory`], the grouping a key belongs to
//! - [`IconIdentifier`], the name of a concrete glyph in the icon set

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Semantic icon name.
///
/// Keys describe what an icon means in the UI rather than what it looks
/// like. The string form is camelCase, matching the names used by the
/// application layer (`"back"`, `"alertSuccess"`, ...).
///
/// # Examples
///
/// ```
/// use compass_icons::IconKey;
///
/// let key: IconKey = "alertError".parse().unwrap();
/// assert_eq!(key, IconKey::AlertError);
/// assert_eq!(key.as_str(), "alertError");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKey {
    /// Navigate back to the previous screen
    Back,
    /// Operation succeeded
    AlertSuccess,
    /// Operation failed
    AlertError,
    /// Something needs attention
    AlertWarning,
    /// Neutral information
    AlertInfo,
}

impl IconKey {
    /// Every key, in declaration order.
    pub const ALL: [IconKey; 5] = [
        IconKey::Back,
        IconKey::AlertSuccess,
        IconKey::AlertError,
        IconKey::AlertWarning,
        IconKey::AlertInfo,
    ];

    /// Get the canonical camelCase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            IconKey::Back => "back",
            IconKey::AlertSuccess => "alertSuccess",
            IconKey::AlertError => "alertError",
            IconKey::AlertWarning => "alertWarning",
            IconKey::AlertInfo => "alertInfo",
        }
    }

    /// Get the category for this key.
    ///
    /// Determined from the name prefix, the same way the app groups them.
    pub fn category(&self) -> IconCategory {
        if self.as_str().starts_with("alert") {
            IconCategory::Alert
        } else {
            IconCategory::Navigation
        }
    }
}

impl FromStr for IconKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::unknown_key(s))
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping of semantic icon keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    /// Moving between screens
    Navigation,
    /// Status banners and toasts
    Alert,
}

impl IconCategory {
    /// Get the category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Navigation => "navigation",
            IconCategory::Alert => "alert",
        }
    }
}

/// Name of a concrete glyph in the external icon set.
///
/// Identifiers use the icon set's PascalCase component names
/// (`"ArrowLeft"`, `"CircleCheck"`). They are not checked against the
/// icon set itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IconIdentifier(&'static str);

impl IconIdentifier {
    /// Create an identifier from a static name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Get the identifier as a string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Get the kebab-case asset name for this identifier.
    ///
    /// A hyphen is inserted before every uppercase letter that follows a
    /// lowercase letter or digit, so `"TriangleAlert"` becomes
    /// `"triangle-alert"`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.0.len() + 4);
        let mut prev: Option<char> = None;
        for c in self.0.chars() {
            if c.is_ascii_uppercase()
                && let Some(p) = prev
                && (p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            prev = Some(c);
        }
        slug
    }
}

impl AsRef<str> for IconIdentifier {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<&str> for IconIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for IconIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

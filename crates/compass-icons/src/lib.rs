//! Icon naming for Compass UI.
//!
//! This crate maps the semantic icon names used throughout the app to the
//! concrete glyph names of the icon set. The mapping is fixed at compile
//! time and every key is guaranteed an icon.
//!
//! # Example
//!
//! ```
//! use compass_icons::prelude::*;
//!
//! assert_eq!(resolve(IconKey::Back).as_str(), "ArrowLeft");
//! assert_eq!(lookup_icon("alertWarning").unwrap().slug(), "triangle-alert");
//! ```

pub mod icon_map;

mod error;

pub use error::{Error, Result};
pub use icon_map::{IconIdentifier, IconKey, IconNameResolver};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::icon_map::{
        ICON_MAP, IconCategory, IconIdentifier, IconKey, IconManifest, IconMap, IconNameResolver,
        lookup_icon, resolve,
    };
}

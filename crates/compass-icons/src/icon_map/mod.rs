//! Semantic icon map for Compass UI.
//!
//! Screens refer to icons by meaning (`back`, `alertError`) and this module
//! translates those names to the component names of the icon set the
//! rendering layer draws with. It includes:
//!
//! - **Keys**: the closed set of semantic names, see [`IconKey`]
//! - **Resolution**: a total, compile-time table, see [`IconNameResolver`]
//! - **Manifest**: a JSON export of the table, see [`IconManifest`]
//!
//! # Example
//!
//! ```
//! use compass_icons::icon_map::{IconKey, IconNameResolver};
//!
//! let resolver = IconNameResolver::new();
//! assert_eq!(resolver.resolve(IconKey::AlertSuccess).as_str(), "CircleCheck");
//!
//! // Names coming from outside Rust go through `lookup`
//! assert!(resolver.lookup("alertInfo").is_ok());
//! assert!(resolver.lookup("forward").is_err());
//! ```

mod manifest;
mod resolver;
mod types;

pub use manifest::{IconManifest, ManifestEntry};
pub use resolver::{ICON_MAP, IconMap, IconNameResolver, lookup_icon, resolve};
pub use types::{IconCategory, IconIdentifier, IconKey};

//! Post-processing for the Compass UI static web export.
//!
//! The web build writes plain HTML pages whose entry bundles reference
//! `import.meta`. Browsers reject that outside of module scripts, so this
//! crate rewrites the entry `<script>` tags of every exported page to load
//! as ES modules.
//!
//! # Example
//!
//! ```no_run
//! use compass_export::{ExportConfig, fix_export};
//!
//! let report = fix_export(&ExportConfig::new("dist"))?;
//! println!("Fixed {} HTML files", report.fixed_count());
//! # Ok::<(), compass_export::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod walk;

mod error;
mod fixer;
mod html;

pub use config::ExportConfig;
pub use error::{Error, Result};
pub use fixer::{FixReport, fix_export};
pub use html::{fix_html_file, rewrite_module_scripts};
pub use walk::ExportWalker;

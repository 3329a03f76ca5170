//! HTML rewriting for exported pages.
//!
//! The web bundler emits entry scripts as classic deferred scripts. Bundles
//! that touch `import.meta` only work when loaded as ES modules, so each
//! `<script src="..." defer>` tag gets a `type="module"` attribute.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::{Error, Result};

static SCRIPT_TAG: OnceLock<Regex> = OnceLock::new();

fn script_tag_regex() -> &'static Regex {
    // Only bare `src` + `defer` tags; tags that already carry a type differ in shape.
    SCRIPT_TAG.get_or_init(|| Regex::new(r#"<script src="([^"]+)" defer>"#).expect("valid regex"))
}

/// Add `type="module"` to every deferred entry script tag.
///
/// Returns `None` when the document has no such tag, so callers can skip
/// writing unchanged files.
///
/// # Examples
///
/// ```
/// use compass_export::rewrite_module_scripts;
///
/// let html = r#"<script src="/_expo/entry.js" defer></script>"#;
/// assert_eq!(
///     rewrite_module_scripts(html).as_deref(),
///     Some(r#"<script type="module" src="/_expo/entry.js" defer></script>"#),
/// );
/// assert_eq!(rewrite_module_scripts("<p>static</p>"), None);
/// ```
pub fn rewrite_module_scripts(html: &str) -> Option<String> {
    let regex = script_tag_regex();
    if !regex.is_match(html) {
        return None;
    }
    Some(
        regex
            .replace_all(html, r#"<script type="module" src="${1}" defer>"#)
            .into_owned(),
    )
}

/// Rewrite an HTML file in place.
///
/// Returns `true` if the file was changed and written back.
pub fn fix_html_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    match rewrite_module_scripts(&content) {
        Some(fixed) => {
            fs::write(path, fixed).map_err(|e| Error::io(path, e))?;
            tracing::info!("Added module script type: {}", path.display());
            Ok(true)
        }
        None => {
            tracing::debug!("No entry scripts to fix: {}", path.display());
            Ok(false)
        }
    }
}

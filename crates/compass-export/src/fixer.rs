//! Whole-export fixing.

use std::path::PathBuf;

use crate::Result;
use crate::config::ExportConfig;
use crate::html::fix_html_file;
use crate::walk::ExportWalker;

/// Outcome of a [`fix_export`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixReport {
    /// Directory that was processed.
    pub dist_dir: PathBuf,
    /// Number of matching files examined.
    pub scanned: usize,
    /// Files that were rewritten, sorted.
    pub fixed: Vec<PathBuf>,
}

impl FixReport {
    /// Number of files rewritten.
    pub fn fixed_count(&self) -> usize {
        self.fixed.len()
    }
}

/// Rewrite entry scripts in every page of an export.
///
/// Unreadable directory entries are logged and skipped; failures to read or
/// write a matching file abort the run.
pub fn fix_export(config: &ExportConfig) -> Result<FixReport> {
    let _span = tracing::debug_span!("fix_export", dist_dir = %config.dist_dir.display()).entered();

    let mut report = FixReport {
        dist_dir: config.dist_dir.clone(),
        ..Default::default()
    };

    for entry in ExportWalker::new(config)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Skipping entry: {}", e);
                continue;
            }
        };

        report.scanned += 1;
        if fix_html_file(&path)? {
            report.fixed.push(path);
        }
    }

    report.fixed.sort();
    tracing::debug!(
        scanned = report.scanned,
        fixed = report.fixed.len(),
        "Export fix complete"
    );
    Ok(report)
}

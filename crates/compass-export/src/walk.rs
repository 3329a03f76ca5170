//! Recursive traversal of an export directory.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::{Error, Result};

/// Breadth-first walker yielding the files an [`ExportConfig`] selects.
///
/// Directories are read lazily. Symbolic links to files are yielded;
/// symbolic links to directories are not followed into.
#[derive(Debug)]
pub struct ExportWalker<'a> {
    /// Directories still to visit.
    queue: VecDeque<PathBuf>,
    /// Directory currently being read.
    current: Option<(fs::ReadDir, PathBuf)>,
    config: &'a ExportConfig,
}

impl<'a> ExportWalker<'a> {
    /// Create a walker rooted at the config's dist directory.
    pub fn new(config: &'a ExportConfig) -> Result<Self> {
        let root = &config.dist_dir;
        let metadata = fs::metadata(root).map_err(|_| Error::not_a_directory(root))?;
        if !metadata.is_dir() {
            return Err(Error::not_a_directory(root));
        }

        let mut queue = VecDeque::new();
        queue.push_back(root.clone());

        Ok(Self {
            queue,
            current: None,
            config,
        })
    }

    /// Links to files are walked like files; links to directories are not entered.
    fn symlink_is_file(path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) => metadata.is_file(),
            Err(e) => {
                tracing::warn!("Skipping broken link {}: {}", path.display(), e);
                false
            }
        }
    }

    fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'))
    }
}

impl Iterator for ExportWalker<'_> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((ref mut read_dir, ref dir_path)) = self.current {
                match read_dir.next() {
                    Some(Ok(entry)) => {
                        let path = entry.path();
                        if self.config.skip_hidden && Self::is_hidden(&path) {
                            continue;
                        }

                        let file_type = match entry.file_type() {
                            Ok(ft) => ft,
                            Err(e) => return Some(Err(Error::io(path, e))),
                        };

                        let is_file = if file_type.is_symlink() {
                            Self::symlink_is_file(&path)
                        } else if file_type.is_dir() {
                            self.queue.push_back(path);
                            continue;
                        } else {
                            file_type.is_file()
                        };

                        if is_file && self.config.matches_extension(&path) {
                            return Some(Ok(path));
                        }
                        continue;
                    }
                    Some(Err(e)) => return Some(Err(Error::io(dir_path.clone(), e))),
                    None => self.current = None,
                }
            }

            let path = self.queue.pop_front()?;
            match fs::read_dir(&path) {
                Ok(read_dir) => self.current = Some((read_dir, path)),
                Err(e) => return Some(Err(Error::io(path, e))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_walks_nested_html() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("index.html"));
        touch(&dir.path().join("settings/index.html"));
        touch(&dir.path().join("settings/deep/page.html"));
        touch(&dir.path().join("settings/deep/UP.HTML"));
        touch(&dir.path().join("_expo/static/js/entry.js"));

        let config = ExportConfig::new(dir.path());
        let mut found: Vec<_> = ExportWalker::new(&config)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        found.sort();

        assert_eq!(
            found,
            vec![
                dir.path().join("index.html"),
                dir.path().join("settings/deep/page.html"),
                dir.path().join("settings/index.html"),
            ]
        );
    }

    #[test]
    fn test_skip_hidden() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join(".cache/index.html"));
        touch(&dir.path().join(".draft.html"));
        touch(&dir.path().join("index.html"));

        let all = ExportConfig::new(dir.path());
        assert_eq!(ExportWalker::new(&all).unwrap().count(), 3);

        let visible = ExportConfig::new(dir.path()).skip_hidden(true);
        assert_eq!(ExportWalker::new(&visible).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_links_to_files_only() {
        use std::os::unix::fs::symlink;

        let root = tempfile::tempdir().unwrap();
        let dist = root.path().join("dist");
        touch(&root.path().join("shared.html"));
        touch(&root.path().join("outside/page.html"));
        fs::create_dir_all(&dist).unwrap();
        symlink(root.path().join("shared.html"), dist.join("index.html")).unwrap();
        symlink(root.path().join("outside"), dist.join("linked")).unwrap();
        symlink(root.path().join("missing.html"), dist.join("broken.html")).unwrap();

        let config = ExportConfig::new(&dist);
        let found: Vec<_> = ExportWalker::new(&config)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(found, vec![dist.join("index.html")]);
    }

    #[test]
    fn test_root_must_be_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        touch(&file);

        let missing = ExportConfig::new(dir.path().join("dist"));
        assert!(matches!(
            ExportWalker::new(&missing),
            Err(Error::NotADirectory { .. })
        ));

        let not_dir = ExportConfig::new(&file);
        assert!(matches!(
            ExportWalker::new(&not_dir),
            Err(Error::NotADirectory { .. })
        ));
    }
}

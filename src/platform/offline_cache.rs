// platform/offline_cache.rs
use super::PlatformError;
use bevy::prelude::*;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const CACHE_NAME: &str = "life_counter-cache";

/// Assets copied into the cache on install.
pub const ASSET_MANIFEST: &[&str] = &["config.ron"];

/// Live source of asset bytes.
pub trait Fetch {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, PlatformError>;
}

/// Reads assets straight from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetch for DirFetcher {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, PlatformError> {
        let full = resolve(&self.root, path)?;
        fs::read(&full).map_err(|source| PlatformError::Io {
            path: path.to_string(),
            source,
        })
    }
}

/// Cache-first asset access: `install` snapshots the manifest, `serve`
/// prefers the snapshot and falls back to the live fetcher.
pub struct OfflineCache<F> {
    dir: PathBuf,
    fetcher: F,
    manifest: Vec<String>,
}

impl<F: Fetch> OfflineCache<F> {
    pub fn new(dir: impl Into<PathBuf>, fetcher: F, manifest: &[&str]) -> Self {
        Self {
            dir: dir.into(),
            fetcher,
            manifest: manifest.iter().map(|path| path.to_string()).collect(),
        }
    }

    /// Fetches every manifest entry, then writes them all. A failed fetch
    /// leaves the cache untouched.
    pub fn install(&self) -> Result<usize, PlatformError> {
        let fetched = self
            .manifest
            .iter()
            .map(|path| -> Result<_, PlatformError> {
                Ok((path.as_str(), self.fetcher.fetch(path)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (path, bytes) in &fetched {
            let target = resolve(&self.dir, path)?;
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| PlatformError::Io {
                    path: path.to_string(),
                    source,
                })?;
            }
            fs::write(&target, bytes).map_err(|source| PlatformError::Io {
                path: path.to_string(),
                source,
            })?;
        }

        debug!("Cached {} assets in {}", fetched.len(), self.dir.display());
        Ok(fetched.len())
    }

    pub fn serve(&self, path: &str) -> Result<Vec<u8>, PlatformError> {
        let cached = resolve(&self.dir, path)?;
        match fs::read(&cached) {
            Ok(bytes) => Ok(bytes),
            Err(_) => self.fetcher.fetch(path),
        }
    }
}

/// Joins `path` onto `root`, refusing anything that would climb out of it.
fn resolve(root: &Path, path: &str) -> Result<PathBuf, PlatformError> {
    let relative = Path::new(path);
    let inside = relative
        .components()
        .all(|part| matches!(part, Component::Normal(_) | Component::CurDir));
    if !inside {
        return Err(PlatformError::InvalidPath(path.to_string()));
    }
    Ok(root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryFetcher {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MemoryFetcher {
        fn with(files: &[(&str, &str)]) -> Self {
            let fetcher = Self::default();
            for (path, body) in files {
                fetcher.set(path, body);
            }
            fetcher
        }

        fn set(&self, path: &str, body: &str) {
            self.files
                .borrow_mut()
                .insert(path.to_string(), body.as_bytes().to_vec());
        }
    }

    impl Fetch for &MemoryFetcher {
        fn fetch(&self, path: &str) -> Result<Vec<u8>, PlatformError> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| PlatformError::Io {
                    path: path.to_string(),
                    source: std::io::ErrorKind::NotFound.into(),
                })
        }
    }

    #[test]
    fn serves_cached_copy_after_install() {
        let dir = tempfile::tempdir().unwrap();
        let live = MemoryFetcher::with(&[("config.ron", "(default_life: 20)")]);
        let cache = OfflineCache::new(dir.path(), &live, &["config.ron"]);

        assert_eq!(cache.install().unwrap(), 1);
        live.set("config.ron", "(default_life: 30)");

        assert_eq!(cache.serve("config.ron").unwrap(), b"(default_life: 20)");
    }

    #[test]
    fn falls_back_to_live_fetch_when_uncached() {
        let dir = tempfile::tempdir().unwrap();
        let live = MemoryFetcher::with(&[("icons/life.svg", "<svg/>")]);
        let cache = OfflineCache::new(dir.path(), &live, &[]);

        assert_eq!(cache.serve("icons/life.svg").unwrap(), b"<svg/>");
        assert!(cache.serve("missing.ron").is_err());
    }

    #[test]
    fn failed_install_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let live = MemoryFetcher::with(&[("config.ron", "()")]);
        let cache = OfflineCache::new(dir.path(), &live, &["config.ron", "missing.svg"]);

        assert!(cache.install().is_err());
        assert!(!dir.path().join("config.ron").exists());
    }

    #[test]
    fn rejects_paths_outside_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let live = MemoryFetcher::default();
        let cache = OfflineCache::new(dir.path(), &live, &[]);

        assert!(matches!(
            cache.serve("../secret"),
            Err(PlatformError::InvalidPath(_))
        ));
        assert!(matches!(
            cache.serve("/etc/passwd"),
            Err(PlatformError::InvalidPath(_))
        ));
    }

    #[test]
    fn dir_fetcher_reads_from_its_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.ron"), "()").unwrap();
        let fetcher = DirFetcher::new(dir.path());

        assert_eq!(fetcher.fetch("config.ron").unwrap(), b"()");
        assert!(fetcher.fetch("nope.ron").is_err());
    }
}

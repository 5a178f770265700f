//! Lookup of packaged resources by name.
//!
//! A bundle is a plain directory shipped next to the binary. Resources are
//! addressed by `name` + `extension` and may live in subdirectories.

use std::env;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::BundleSettings;

/// Directory name used when no bundle location is configured.
pub const DEFAULT_BUNDLE_DIR: &str = "resources";

#[derive(Debug, Clone)]
pub struct Bundle {
    root: PathBuf,
    follow_links: bool,
    max_depth: Option<usize>,
}

impl Bundle {
    pub fn new(root: impl Into<PathBuf>, settings: &BundleSettings) -> Self {
        Self {
            root: root.into(),
            follow_links: settings.follow_links,
            max_depth: settings.max_depth,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find `name.extension` inside the bundle.
    ///
    /// The shallowest match wins; ties are broken by path order.
    pub fn path_for_resource(&self, name: &str, extension: &str) -> Option<PathBuf> {
        let file_name = format!("{name}.{extension}");

        let mut walker = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        if let Some(d) = self.max_depth {
            walker = walker.max_depth(d);
        }

        walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.depth() > 0 && e.file_name().to_str() == Some(file_name.as_str()))
            .filter(|e| e.path().is_file())
            .min_by_key(|e| e.depth())
            .map(|e| e.into_path())
    }
}

/// Pick the bundle directory: CLI argument, then config, then
/// `resources/` beside the executable, then `./resources`.
pub fn resolve_bundle_dir(cli_arg: Option<String>, settings: &BundleSettings) -> PathBuf {
    if let Some(arg) = cli_arg {
        return PathBuf::from(arg);
    }
    if let Some(dir) = &settings.dir {
        return dir.clone();
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(DEFAULT_BUNDLE_DIR)))
        .filter(|p| p.is_dir())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn bundle(root: &Path) -> Bundle {
        Bundle::new(root, &BundleSettings::default())
    }

    #[test]
    fn finds_resource_at_bundle_root() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1.mp3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("2.mp3"), b"not a real mp3").unwrap();

        let b = bundle(dir.path());
        assert_eq!(
            b.path_for_resource("1", "mp3"),
            Some(dir.path().join("1.mp3"))
        );
        assert_eq!(
            b.path_for_resource("2", "mp3"),
            Some(dir.path().join("2.mp3"))
        );
    }

    #[test]
    fn missing_resource_or_wrong_extension_is_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1.wav"), b"x").unwrap();
        fs::write(dir.path().join("12.mp3"), b"x").unwrap();

        let b = bundle(dir.path());
        assert_eq!(b.path_for_resource("1", "mp3"), None);
        assert_eq!(b.path_for_resource("3", "mp3"), None);
    }

    #[test]
    fn directories_named_like_resources_are_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("1.mp3")).unwrap();

        assert_eq!(bundle(dir.path()).path_for_resource("1", "mp3"), None);
    }

    #[test]
    fn shallowest_match_wins() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("1.mp3"), b"deep").unwrap();
        fs::write(dir.path().join("a").join("1.mp3"), b"shallow").unwrap();

        assert_eq!(
            bundle(dir.path()).path_for_resource("1", "mp3"),
            Some(dir.path().join("a").join("1.mp3"))
        );
    }

    #[test]
    fn respects_max_depth() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("2.mp3"), b"x").unwrap();

        // WalkDir counts the root as depth 0, so depth 1 is the root's files only.
        let settings = BundleSettings {
            max_depth: Some(1),
            ..BundleSettings::default()
        };
        let b = Bundle::new(dir.path(), &settings);
        assert_eq!(b.path_for_resource("2", "mp3"), None);
    }

    #[test]
    fn resolve_bundle_dir_prefers_cli_then_config() {
        let settings = BundleSettings {
            dir: Some(PathBuf::from("/from/config")),
            ..BundleSettings::default()
        };
        assert_eq!(
            resolve_bundle_dir(Some("/from/cli".to_string()), &settings),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            resolve_bundle_dir(None, &settings),
            PathBuf::from("/from/config")
        );
    }
}

//! Path resolution for file completion
//!
//! Turns the raw path text typed after a history command into a
//! (search directory, name prefix) pair. Absolute paths are used directly,
//! `~` expands to the user's home directory, and anything else resolves
//! against the session's base directory.

use std::path::{Path, PathBuf};

/// A resolved path query: where to search and which name prefix to match.
///
/// Derived fresh on every completion request and never cached; the
/// filesystem may change between keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    /// Directory whose entries are listed.
    pub base_dir: PathBuf,

    /// Partial entry name being typed. Empty means "list everything".
    pub name_prefix: String,
}

/// Resolver from raw path text to a [`PathQuery`].
pub struct PathResolver;

impl PathResolver {
    /// Resolve raw path text against a session base directory.
    ///
    /// Only one filesystem check is performed here: whether the resolved
    /// path names an existing directory. A nonexistent base directory is
    /// reported later by the file completer as zero candidates, not here.
    ///
    /// # Arguments
    /// * `raw` - Path text as typed (possibly empty or partial)
    /// * `session_base` - Directory relative paths resolve against
    ///
    /// # Returns
    /// * `PathQuery` - Search directory and name prefix
    pub fn resolve(raw: &str, session_base: &Path) -> PathQuery {
        let search_path = Self::absolute(raw, session_base);

        if search_path.is_dir() {
            return PathQuery {
                base_dir: search_path,
                name_prefix: String::new(),
            };
        }

        let name_prefix = search_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base_dir = search_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| search_path.clone());

        PathQuery {
            base_dir,
            name_prefix,
        }
    }

    /// Resolve raw path text to a full path against a session base
    /// directory.
    ///
    /// The same ladder [`PathResolver::resolve`] starts from: absolute
    /// paths pass through, `~` expands to the home directory, anything
    /// else joins the session base. History commands use this when they
    /// execute, so the file acted on is the one completion suggested.
    pub fn absolute(raw: &str, session_base: &Path) -> PathBuf {
        if raw.starts_with(std::path::MAIN_SEPARATOR) {
            PathBuf::from(raw)
        } else if raw.starts_with('~') {
            Self::expand_home(raw, session_base)
        } else {
            session_base.join(raw)
        }
    }

    /// Expand a leading `~` to the user's home directory.
    ///
    /// Falls back to resolving against the session base when no home
    /// directory is known; completion must stay best-effort.
    fn expand_home(raw: &str, session_base: &Path) -> PathBuf {
        let Some(home) = dirs::home_dir() else {
            return session_base.join(raw);
        };

        let rest = raw[1..].trim_start_matches(std::path::MAIN_SEPARATOR);
        if rest.is_empty() {
            home
        } else {
            home.join(rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_text_lists_session_base() {
        let dir = tempdir().unwrap();
        let query = PathResolver::resolve("", dir.path());

        assert_eq!(query.base_dir, dir.path());
        assert_eq!(query.name_prefix, "");
    }

    #[test]
    fn test_partial_name_splits_into_parent_and_prefix() {
        let dir = tempdir().unwrap();
        let query = PathResolver::resolve("hist", dir.path());

        assert_eq!(query.base_dir, dir.path());
        assert_eq!(query.name_prefix, "hist");
    }

    #[test]
    fn test_existing_directory_has_empty_prefix() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let query = PathResolver::resolve("sub", dir.path());

        assert_eq!(query.base_dir, dir.path().join("sub"));
        assert_eq!(query.name_prefix, "");
    }

    #[test]
    fn test_absolute_path_ignores_session_base() {
        let dir = tempdir().unwrap();
        let raw = dir.path().join("hist").to_string_lossy().into_owned();

        let query = PathResolver::resolve(&raw, Path::new("/nonexistent"));

        assert_eq!(query.base_dir, dir.path());
        assert_eq!(query.name_prefix, "hist");
    }

    #[test]
    fn test_nested_partial_path() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let query = PathResolver::resolve("sub/hi", dir.path());

        assert_eq!(query.base_dir, dir.path().join("sub"));
        assert_eq!(query.name_prefix, "hi");
    }

    #[test]
    fn test_nonexistent_base_still_resolves() {
        // No existence check beyond the directory test; the file completer
        // turns a missing directory into zero candidates.
        let query = PathResolver::resolve("no/such/dir/file", Path::new("/nonexistent"));

        assert_eq!(query.base_dir, Path::new("/nonexistent/no/such/dir"));
        assert_eq!(query.name_prefix, "file");
    }

    #[test]
    fn test_absolute_joins_relative_against_base() {
        let path = PathResolver::absolute("history.json", Path::new("/data"));
        assert_eq!(path, Path::new("/data/history.json"));
    }

    #[test]
    fn test_absolute_passes_through_rooted_paths() {
        let path = PathResolver::absolute("/tmp/history.json", Path::new("/data"));
        assert_eq!(path, Path::new("/tmp/history.json"));
    }

    #[test]
    fn test_home_marker_expands() {
        if let Some(home) = dirs::home_dir() {
            let query = PathResolver::resolve("~", Path::new("/tmp"));
            assert_eq!(query.base_dir, home);
        }
    }
}

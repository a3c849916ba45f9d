//! File path completion
//!
//! Lists a directory and produces candidates for entries matching a name
//! prefix. Directories are always offered (with a trailing separator) so the
//! user can keep navigating; regular files are filtered by an allowed
//! extension set. Every failure mode degrades to "no suggestions": an
//! interactive completer must never interrupt typing.

use std::path::Path;

use tracing::debug;

use super::candidate::Candidate;
use super::path::PathQuery;

/// Completer for filesystem paths, filtering files by extension.
pub struct FileCompleter {
    /// Allowed file extensions, stored lowercase with their leading dot
    /// (e.g. ".json").
    extensions: Vec<String>,
}

impl FileCompleter {
    /// Default extensions: serialized history and markdown notes.
    pub const DEFAULT_EXTENSIONS: [&'static str; 2] = [".json", ".md"];

    /// Create a file completer for the given extensions.
    ///
    /// # Arguments
    /// * `extensions` - Extensions to allow, with or without a leading dot
    pub fn new(extensions: &[impl AsRef<str>]) -> Self {
        let extensions = extensions
            .iter()
            .map(|ext| {
                let ext = ext.as_ref().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();

        Self { extensions }
    }

    /// List matching entries for a resolved path query.
    ///
    /// The directory is re-read on every call; results are never cached.
    /// A missing or unreadable directory yields an empty vec, and an error
    /// in the middle of the listing truncates it, keeping the candidates
    /// already produced.
    ///
    /// # Arguments
    /// * `query` - Search directory and name prefix
    ///
    /// # Returns
    /// * `Vec<Candidate>` - Matching entries, sorted by name
    pub fn complete(&self, query: &PathQuery) -> Vec<Candidate> {
        let entries = match std::fs::read_dir(&query.base_dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(dir = %query.base_dir.display(), %err, "directory not listable");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => names.push(entry.file_name().to_string_lossy().into_owned()),
                // Partial results already collected stay valid.
                Err(err) => {
                    debug!(dir = %query.base_dir.display(), %err, "listing truncated");
                    break;
                }
            }
        }

        // Ordinal, locale-independent ordering.
        names.sort();

        let prefix_lower = query.name_prefix.to_lowercase();
        let replace_len = query.name_prefix.len();

        let mut candidates = Vec::new();
        for name in names {
            if !prefix_lower.is_empty() && !name.to_lowercase().starts_with(&prefix_lower) {
                continue;
            }

            let path = query.base_dir.join(&name);
            if path.is_dir() {
                // Directories are always offered for navigation, even when
                // the extension filter would exclude every file inside.
                let display = format!("{name}{}", std::path::MAIN_SEPARATOR);
                candidates.push(Candidate::new(display, replace_len, "directory"));
            } else if let Some(ext) = Self::dotted_extension(&path)
                && self.extensions.contains(&ext.to_lowercase())
            {
                // Annotation keeps the file's own casing; only the
                // membership test is folded.
                candidates.push(Candidate::new(name, replace_len, format!("{ext} file")));
            }
        }

        candidates
    }

    /// Extension of a path including the leading dot, casing preserved.
    fn dotted_extension(path: &Path) -> Option<String> {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
    }
}

impl Default for FileCompleter {
    fn default() -> Self {
        Self::new(&Self::DEFAULT_EXTENSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn query(base_dir: impl Into<PathBuf>, name_prefix: &str) -> PathQuery {
        PathQuery {
            base_dir: base_dir.into(),
            name_prefix: name_prefix.to_string(),
        }
    }

    fn names(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.insert_text.as_str()).collect()
    }

    #[test]
    fn test_empty_prefix_lists_allowed_files_and_directories() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("history.json")).unwrap();
        File::create(dir.path().join("notes.md")).unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let completer = FileCompleter::default();
        let candidates = completer.complete(&query(dir.path(), ""));

        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            names(&candidates),
            vec![
                "history.json".to_string(),
                "notes.md".to_string(),
                format!("sub{sep}"),
            ]
        );
    }

    #[test]
    fn test_prefix_matches_case_insensitively() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("History.json")).unwrap();
        File::create(dir.path().join("config.json")).unwrap();

        let completer = FileCompleter::default();
        let candidates = completer.complete(&query(dir.path(), "hist"));

        assert_eq!(names(&candidates), vec!["History.json"]);
    }

    #[test]
    fn test_prefix_scenario_sorted() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("history1.json")).unwrap();
        File::create(dir.path().join("history2.json")).unwrap();
        File::create(dir.path().join("config.json")).unwrap();

        let completer = FileCompleter::default();
        let candidates = completer.complete(&query(dir.path(), "hist"));

        assert_eq!(names(&candidates), vec!["history1.json", "history2.json"]);
    }

    #[test]
    fn test_directories_included_with_empty_extension_set() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("history.json")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let completer = FileCompleter::new(&[] as &[&str]);
        let candidates = completer.complete(&query(dir.path(), ""));

        assert_eq!(
            names(&candidates),
            vec![format!("sub{}", std::path::MAIN_SEPARATOR)]
        );
        assert_eq!(candidates[0].metadata, "directory");
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("history.JSON")).unwrap();
        File::create(dir.path().join("readme.TXT")).unwrap();

        let completer = FileCompleter::default();
        let candidates = completer.complete(&query(dir.path(), ""));

        assert_eq!(names(&candidates), vec!["history.JSON"]);
        // The annotation carries the entry's own casing.
        assert_eq!(candidates[0].metadata, ".JSON file");
    }

    #[test]
    fn test_nonexistent_directory_returns_empty() {
        let completer = FileCompleter::default();
        let candidates = completer.complete(&query("/no/such/directory", ""));

        assert!(candidates.is_empty());
    }

    #[test]
    fn test_replace_len_covers_only_the_prefix() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("history.json")).unwrap();

        let completer = FileCompleter::default();
        let candidates = completer.complete(&query(dir.path(), "his"));

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].replace_len, 3);
    }

    #[test]
    fn test_repeat_call_rereads_directory() {
        let dir = tempdir().unwrap();
        let completer = FileCompleter::default();

        assert!(completer.complete(&query(dir.path(), "")).is_empty());

        File::create(dir.path().join("late.json")).unwrap();
        let candidates = completer.complete(&query(dir.path(), ""));
        assert_eq!(names(&candidates), vec!["late.json"]);
    }

    #[test]
    fn test_extensions_normalized_without_dot() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("notes.md")).unwrap();

        let completer = FileCompleter::new(&["md"]);
        let candidates = completer.complete(&query(dir.path(), ""));

        assert_eq!(names(&candidates), vec!["notes.md"]);
    }
}

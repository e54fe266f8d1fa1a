//! Word list data attached to a policy.
//!
//! A policy carries three word lists (common words, personal names,
//! common passwords) and a prefix index over each, built when the lexicon
//! is constructed. No validation rule consults them; they are
//! configuration state for callers that want the raw lists or the
//! indexes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Words are bucketed by their first `PREFIX_LENGTH` characters.
pub const PREFIX_LENGTH: usize = 3;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Word list file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty: {}", .0.display())]
    EmptyFile(PathBuf),
}

/// Lookup structure over one word list, keyed by fixed-length prefix.
///
/// Words shorter than the prefix length are keyed by the whole word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl PrefixIndex {
    pub fn build(words: &[String]) -> Self {
        let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
        for word in words {
            let prefix: String = word.chars().take(PREFIX_LENGTH).collect();
            buckets.entry(prefix).or_default().push(word.clone());
        }
        Self { buckets }
    }

    pub fn contains(&self, word: &str) -> bool {
        let prefix: String = word.chars().take(PREFIX_LENGTH).collect();
        self.buckets
            .get(&prefix)
            .is_some_and(|bucket| bucket.iter().any(|w| w == word))
    }

    /// Number of prefix buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// The three word lists and their prefix indexes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
    names: Vec<String>,
    passwords: Vec<String>,
    words_index: PrefixIndex,
    names_index: PrefixIndex,
    passwords_index: PrefixIndex,
}

impl Lexicon {
    /// Builds a lexicon and its indexes from in-memory word lists.
    pub fn new(words: Vec<String>, names: Vec<String>, passwords: Vec<String>) -> Self {
        let words_index = PrefixIndex::build(&words);
        let names_index = PrefixIndex::build(&names);
        let passwords_index = PrefixIndex::build(&passwords);
        Self {
            words,
            names,
            passwords,
            words_index,
            names_index,
            passwords_index,
        }
    }

    /// Loads the three word lists from `words.txt`, `names.txt` and
    /// `passwords.txt` under the lexicon directory.
    ///
    /// # Environment Variable
    ///
    /// Set `PWD_LEXICON_DIR` to specify the directory. If not set,
    /// defaults to `./assets`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three files does not exist, cannot
    /// be read, or is empty.
    pub fn load_default() -> Result<Self, LexiconError> {
        let dir = lexicon_dir();
        Self::from_files(
            &dir.join("words.txt"),
            &dir.join("names.txt"),
            &dir.join("passwords.txt"),
        )
    }

    /// Loads the three word lists from explicit file paths.
    pub fn from_files(words: &Path, names: &Path, passwords: &Path) -> Result<Self, LexiconError> {
        let words = read_word_list(words)?;
        let names = read_word_list(names)?;
        let passwords = read_word_list(passwords)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Lexicon loaded: {} words, {} names, {} passwords",
            words.len(),
            names.len(),
            passwords.len()
        );

        Ok(Self::new(words, names, passwords))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn passwords(&self) -> &[String] {
        &self.passwords
    }

    pub fn words_index(&self) -> &PrefixIndex {
        &self.words_index
    }

    pub fn names_index(&self) -> &PrefixIndex {
        &self.names_index
    }

    pub fn passwords_index(&self) -> &PrefixIndex {
        &self.passwords_index
    }
}

/// Returns the lexicon directory.
///
/// Priority:
/// 1. Environment variable `PWD_LEXICON_DIR`
/// 2. Default directory `./assets`
pub fn lexicon_dir() -> PathBuf {
    std::env::var("PWD_LEXICON_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets"))
}

/// Reads one word per line, trimmed and lowercased, skipping blanks.
fn read_word_list(path: &Path) -> Result<Vec<String>, LexiconError> {
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Lexicon load FAILED: file not found {:?}", path);
        return Err(LexiconError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Lexicon load FAILED: empty file {:?}", path);
        return Err(LexiconError::EmptyFile(path.to_path_buf()));
    }

    Ok(content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn write_list(dir: &TempDir, file: &str, words: &[&str]) -> PathBuf {
        let path = dir.path().join(file);
        let mut f = std::fs::File::create(&path).expect("Failed to create word list");
        for word in words {
            writeln!(f, "{}", word).expect("Failed to write");
        }
        path
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_prefix_index_contains() {
        let index = PrefixIndex::build(&strings(&["horse", "house", "ox"]));
        assert!(index.contains("horse"));
        assert!(index.contains("ox"));
        assert!(!index.contains("horses"));
        assert!(!index.contains("mouse"));
    }

    #[test]
    fn test_prefix_index_buckets_by_prefix() {
        let index = PrefixIndex::build(&strings(&["horse", "hormone", "house"]));
        // "horse" and "hormone" share the "hor" bucket.
        assert_eq!(index.bucket_count(), 2);
    }

    #[test]
    fn test_default_lexicon_is_empty() {
        let lexicon = Lexicon::default();
        assert!(lexicon.words().is_empty());
        assert!(lexicon.words_index().is_empty());
        assert!(lexicon.passwords_index().is_empty());
    }

    #[test]
    fn test_new_builds_all_three_indexes() {
        let lexicon = Lexicon::new(
            strings(&["apple"]),
            strings(&["alice", "bob"]),
            strings(&["hunter2"]),
        );
        assert!(lexicon.words_index().contains("apple"));
        assert!(lexicon.names_index().contains("bob"));
        assert!(lexicon.passwords_index().contains("hunter2"));
        assert!(!lexicon.words_index().contains("hunter2"));
    }

    #[test]
    fn test_from_files_loads_and_normalizes() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let words = write_list(&dir, "words.txt", &["Apple ", "", "  Pear"]);
        let names = write_list(&dir, "names.txt", &["Alice"]);
        let passwords = write_list(&dir, "passwords.txt", &["qwerty"]);

        let lexicon = Lexicon::from_files(&words, &names, &passwords).unwrap();
        assert_eq!(lexicon.words(), &strings(&["apple", "pear"]));
        assert_eq!(lexicon.names(), &strings(&["alice"]));
        assert!(lexicon.passwords_index().contains("qwerty"));
    }

    #[test]
    fn test_from_files_file_not_found() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let names = write_list(&dir, "names.txt", &["alice"]);
        let passwords = write_list(&dir, "passwords.txt", &["qwerty"]);

        let missing = dir.path().join("words.txt");
        let result = Lexicon::from_files(&missing, &names, &passwords);
        assert!(matches!(result, Err(LexiconError::FileNotFound(_))));
    }

    #[test]
    fn test_from_files_empty_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let words = write_list(&dir, "words.txt", &[]);
        let names = write_list(&dir, "names.txt", &["alice"]);
        let passwords = write_list(&dir, "passwords.txt", &["qwerty"]);

        let result = Lexicon::from_files(&words, &names, &passwords);
        assert!(matches!(result, Err(LexiconError::EmptyFile(_))));
    }

    #[test]
    #[serial]
    fn test_lexicon_dir_default() {
        remove_env("PWD_LEXICON_DIR");
        assert_eq!(lexicon_dir(), PathBuf::from("./assets"));
    }

    #[test]
    #[serial]
    fn test_lexicon_dir_from_env() {
        set_env("PWD_LEXICON_DIR", "/custom/lexicon");
        assert_eq!(lexicon_dir(), PathBuf::from("/custom/lexicon"));
        remove_env("PWD_LEXICON_DIR");
    }

    #[test]
    #[serial]
    fn test_load_default_uses_env_dir() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        write_list(&dir, "words.txt", &["apple"]);
        write_list(&dir, "names.txt", &["alice"]);
        write_list(&dir, "passwords.txt", &["qwerty"]);

        set_env("PWD_LEXICON_DIR", dir.path().to_str().unwrap());
        let lexicon = Lexicon::load_default().unwrap();
        assert!(lexicon.words_index().contains("apple"));

        remove_env("PWD_LEXICON_DIR");
    }
}

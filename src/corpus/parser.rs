//! Word list parser.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("Failed to read word list {}", path.display())]
    Io {
        /// Path of the word list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for word list loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Options controlling how a word list is tokenized and filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Separator characters; `None` splits on any whitespace
    pub separators: Option<String>,
    /// Keep only the first `limit` words (after the length filter)
    pub limit: Option<usize>,
    /// Keep only words with exactly this many characters
    pub length: Option<usize>,
}

/// An ordered sequence of words, as read from a file.
///
/// Duplicates are kept: each position is a distinct entry.
///
/// # Example
///
/// ```rust
/// use approxmatch::corpus::{LoadOptions, WordList};
///
/// let words = WordList::parse("cat\ncot\n\ncat\n", &LoadOptions::default());
/// assert_eq!(words.as_slice(), ["cat", "cot", "cat"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read. Nothing is
    /// loaded partially.
    pub fn load<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&text, options);
        tracing::info!(path = %path.display(), count = list.len(), "read word list");
        Ok(list)
    }

    /// Tokenize an in-memory text.
    pub fn parse(text: &str, options: &LoadOptions) -> Self {
        let tokens: Box<dyn Iterator<Item = &str> + '_> = match options.separators.as_deref() {
            Some(separators) if !separators.is_empty() => Box::new(
                text.split(|c: char| separators.contains(c))
                    .map(str::trim),
            ),
            _ => Box::new(text.split_whitespace()),
        };

        let words = tokens
            .filter(|token| !token.is_empty())
            .filter(|token| {
                options
                    .length
                    .map_or(true, |length| token.chars().count() == length)
            })
            .take(options.limit.unwrap_or(usize::MAX))
            .map(str::to_string)
            .collect();

        Self { words }
    }

    /// Number of words read.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were read.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in file order.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

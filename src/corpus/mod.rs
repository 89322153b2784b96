//! Word list loading for dictionaries and pattern batches.
//!
//! Both inputs of a matching run are plain text files holding one word per
//! token:
//!
//! ```text
//! cat
//! cot
//! dog
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use approxmatch::corpus::{LoadOptions, WordList};
//!
//! let dictionary = WordList::load("data/dict.txt", &LoadOptions::default())?;
//! let patterns = WordList::load(
//!     "data/queries.txt",
//!     &LoadOptions { length: Some(8), ..LoadOptions::default() },
//! )?;
//! println!("Read #words = {}", dictionary.len());
//! ```
//!
//! ## Tokenization
//!
//! Without explicit separators the text is split on any whitespace. With
//! separators, it is split on any of the given characters and each token is
//! trimmed. Empty tokens are dropped; order and duplicates are preserved.

pub mod parser;

pub use parser::{LoadError, LoadOptions, WordList};

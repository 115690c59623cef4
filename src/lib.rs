//! In-memory word completion backed by a prefix tree.
//!
//! [`PrefixTree`] holds the words, [`dictionary`] fills one from a word list
//! and [`Session`] tracks what the user has typed so far.

pub mod dictionary;
pub mod error;
pub mod session;
pub mod tree;

pub use dictionary::{load_dictionary, LoadReport, WordSource};
pub use error::DictionaryError;
pub use session::Session;
pub use tree::PrefixTree;

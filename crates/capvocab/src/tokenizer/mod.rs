//! # Caption Tokenizer
//!
//! Converts one caption string into an ordered sequence of normalized words.
//!
//! The pipeline is fixed:
//! 1. lowercase the whole string;
//! 2. remove every ASCII punctuation character, without replacement
//!    (`"don't"` becomes `"dont"`);
//! 3. segment into words on whitespace and the remaining boundary characters;
//! 4. drop words shorter than [`TokenizerOptions::min_token_len`] characters.
//!
//! ```rust
//! assert_eq!(capvocab::tokenize("A cat, sat!"), vec!["cat", "sat"]);
//! ```

mod caption_tokenizer;
mod normalize;
mod tokenizer_options;

#[doc(inline)]
pub use caption_tokenizer::*;
#[doc(inline)]
pub use normalize::*;
#[doc(inline)]
pub use tokenizer_options::*;

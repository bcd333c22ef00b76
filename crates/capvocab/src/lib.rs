//! # `capvocab` Caption Vocabulary Suite
//!
//! Builds a finite word vocabulary from a corpus of image captions, and
//! converts captions to and from sequences of integer token ids.
//!
//! See:
//! * [`tokenizer`] to normalize and split caption text into words.
//! * [`vocab`] to build, query, save and load a [`Vocabulary`].
//! * [`corpus`] to read caption tables and drive vocabulary construction.
//! * [`rayon`] for batch-parallel numericalize / decode.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Building a Vocabulary
//!
//! ```rust
//! use capvocab::{Vocabulary, vocab::VocabOptions};
//!
//! let captions = ["a cat sat", "a cat ran", "a dog sat"];
//! let vocab: Vocabulary =
//!     Vocabulary::from_captions(VocabOptions::default().with_freq_threshold(2), captions)?;
//!
//! assert_eq!(vocab.numericalize("the cat sat", true), vec![1, 3, 4, 5, 2]);
//! assert_eq!(vocab.decode(&[1, 4, 5, 2], true), "cat sat");
//! # Ok::<(), capvocab::CapvocabError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "corpus")]
pub mod corpus;

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod errors;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{CVResult, CapvocabError};
#[doc(inline)]
pub use tokenizer::{CaptionTokenizer, TokenizerOptions, tokenize};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{VocabBuilder, VocabOptions, Vocabulary};

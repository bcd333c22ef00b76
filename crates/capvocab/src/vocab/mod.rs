//! # Vocabulary
//!
//! This module provides the caption vocabulary and related io mechanisms.
//!
//! ## Lifecycle
//!
//! A [`Vocabulary`] starts with only the special tokens (see [`special_tokens`]),
//! and is populated exactly once from a corpus; either through a [`VocabBuilder`],
//! [`Vocabulary::from_captions`], or [`Vocabulary::build_vocabulary`].
//! After that it is read-only.
//!
//! ## Admission
//!
//! Corpus words are admitted when their corpus-wide count reaches
//! [`VocabOptions::freq_threshold`]; ordered by descending count, with ties
//! broken by ascending word order; and capped at [`VocabOptions::max_size`].
//!
//! ## IO
//!
//! See [`io`] for the persisted JSON form.
pub mod io;
pub mod special_tokens;
pub mod vocab_builder;
pub mod vocab_options;
pub mod vocabulary;
pub mod word_counter;

#[doc(inline)]
pub use special_tokens::*;
#[doc(inline)]
pub use vocab_builder::VocabBuilder;
#[doc(inline)]
pub use vocab_options::{DEFAULT_FREQ_THRESHOLD, VocabOptions};
#[doc(inline)]
pub use vocabulary::Vocabulary;
#[doc(inline)]
pub use word_counter::WordCounter;

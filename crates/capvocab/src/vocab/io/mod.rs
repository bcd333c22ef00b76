//! # Vocabulary IO
//!
//! Vocabularies are stored as one self-describing JSON document, holding
//! the id-ordered token list, the build thresholds and the tokenizer options.
//!
//! ## Saving and Loading A Vocab
//!
//! ```rust,no_run
//! use capvocab::{
//!     Vocabulary,
//!     vocab::{
//!         VocabOptions,
//!         io::{load_json_vocab_path, save_json_vocab_path},
//!     },
//! };
//!
//! fn example() -> capvocab::CVResult<()> {
//!     let vocab: Vocabulary =
//!         Vocabulary::from_captions(VocabOptions::default(), ["a dog runs on the grass"])?;
//!     save_json_vocab_path(&vocab, "vocabulary.json")?;
//!
//!     let loaded: Vocabulary = load_json_vocab_path("vocabulary.json")?;
//!     assert_eq!(loaded, vocab);
//!     Ok(())
//! }
//! ```

mod json_vocab;

#[doc(inline)]
pub use json_vocab::*;

//! # Caption Corpus
//!
//! Reads captions from tabular sources and drives vocabulary construction.
//!
//! Supported sources:
//! * CSV, with a header row; see [`CaptionFormat::Csv`].
//! * Parquet; see [`CaptionFormat::Parquet`].
//! * Plain text, one caption per line; see [`CaptionFormat::Text`].
//!
//! ```rust,no_run
//! use capvocab::{
//!     Vocabulary,
//!     corpus::{CaptionSource, build_vocab_from_captions},
//!     vocab::VocabOptions,
//! };
//!
//! fn example() -> capvocab::CVResult<()> {
//!     let source = CaptionSource::from_path("data/captions.csv");
//!     let vocab: Vocabulary = build_vocab_from_captions(
//!         &source,
//!         "artifacts",
//!         VocabOptions::default().with_freq_threshold(5),
//!     )?;
//!     println!("vocabulary size: {}", vocab.len());
//!     Ok(())
//! }
//! ```

mod caption_source;
mod corpus_builder;

#[doc(inline)]
pub use caption_source::*;
#[doc(inline)]
pub use corpus_builder::*;

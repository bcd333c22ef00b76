//! # Rayon Batch Wrappers
//!
//! Batch-level parallel numericalize / decode over a shared [`Vocabulary`](crate::Vocabulary).

mod parallel_vocab;

#[doc(inline)]
pub use parallel_vocab::*;

//! # Parallel Vocabulary

use std::{ops::Deref, sync::Arc};

use rayon::prelude::*;

use crate::{TokenType, vocab::Vocabulary};

/// Batch-Level Parallel Vocabulary Wrapper.
///
/// Enables ``rayon`` numericalize / decode of batches.
/// Output order always matches input order.
#[derive(Debug, Clone)]
pub struct ParallelVocab<T: TokenType = u32> {
    /// Inner vocabulary.
    pub inner: Arc<Vocabulary<T>>,
}

impl<T: TokenType> From<Vocabulary<T>> for ParallelVocab<T> {
    fn from(vocab: Vocabulary<T>) -> Self {
        Self::new(Arc::new(vocab))
    }
}

impl<T: TokenType> Deref for ParallelVocab<T> {
    type Target = Vocabulary<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: TokenType> ParallelVocab<T> {
    /// Create a new parallel wrapper.
    pub fn new(inner: Arc<Vocabulary<T>>) -> Self {
        Self { inner }
    }

    /// Numericalize every caption in `batch`.
    pub fn numericalize_batch<S>(
        &self,
        batch: &[S],
        add_special_tokens: bool,
    ) -> Vec<Vec<T>>
    where
        S: AsRef<str> + Sync,
    {
        batch
            .par_iter()
            .map(|text| self.inner.numericalize(text.as_ref(), add_special_tokens))
            .collect()
    }

    /// Decode every id sequence in `batch` into a joined caption.
    pub fn decode_batch<V>(
        &self,
        batch: &[V],
        remove_special: bool,
    ) -> Vec<String>
    where
        V: AsRef<[T]> + Sync,
    {
        batch
            .par_iter()
            .map(|ids| self.inner.decode(ids.as_ref(), remove_special))
            .collect()
    }
}

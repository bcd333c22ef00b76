//! # Vocabulary Options

use serde::{Deserialize, Serialize};

use crate::{CVResult, TokenType, tokenizer::TokenizerOptions, vocab::VocabBuilder};

/// The default minimum corpus-wide count for a word to be admitted.
pub const DEFAULT_FREQ_THRESHOLD: usize = 5;

/// Options for building a [`Vocabulary`](crate::Vocabulary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabOptions {
    /// Minimum corpus-wide occurrence count (inclusive) for a word.
    pub freq_threshold: usize,

    /// Optional cap on the number of corpus words; special tokens are not counted.
    pub max_size: Option<usize>,

    /// Tokenizer configuration.
    pub tokenizer: TokenizerOptions,
}

impl Default for VocabOptions {
    fn default() -> Self {
        Self {
            freq_threshold: DEFAULT_FREQ_THRESHOLD,
            max_size: None,
            tokenizer: TokenizerOptions::default(),
        }
    }
}

impl VocabOptions {
    /// Sets the frequency threshold.
    pub fn with_freq_threshold(
        mut self,
        freq_threshold: usize,
    ) -> Self {
        self.freq_threshold = freq_threshold;
        self
    }

    /// Sets the maximum number of corpus words.
    pub fn with_max_size(
        mut self,
        max_size: Option<usize>,
    ) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the tokenizer options.
    pub fn with_tokenizer(
        mut self,
        tokenizer: TokenizerOptions,
    ) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Start a [`VocabBuilder`] with these options.
    pub fn init<T: TokenType>(self) -> CVResult<VocabBuilder<T>> {
        VocabBuilder::new(self)
    }
}

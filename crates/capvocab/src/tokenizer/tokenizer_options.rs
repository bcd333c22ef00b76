use serde::{Deserialize, Serialize};

use crate::{CVResult, tokenizer::CaptionTokenizer};

/// The default word segmentation pattern.
///
/// Words are maximal runs of word characters; any other run of
/// non-whitespace characters forms its own token.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+|[^\w\s]+";

/// The default minimum token length, in characters.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// The lowest accepted minimum token length; single characters are never words.
pub const MIN_TOKEN_LEN_FLOOR: usize = 2;

/// Options for configuring a [`CaptionTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Word segmentation regex, applied to normalized text.
    pub word_pattern: String,

    /// Words with fewer characters than this are dropped.
    ///
    /// Must be at least [`MIN_TOKEN_LEN_FLOOR`].
    pub min_token_len: usize,

    /// Split fused forms such as `"cannot"` into two words.
    pub split_contractions: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            split_contractions: true,
        }
    }
}

impl TokenizerOptions {
    /// Sets the word segmentation pattern.
    pub fn with_word_pattern<S: Into<String>>(
        mut self,
        word_pattern: S,
    ) -> Self {
        self.word_pattern = word_pattern.into();
        self
    }

    /// Sets the minimum token length.
    pub fn with_min_token_len(
        mut self,
        min_token_len: usize,
    ) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    /// Sets whether fused forms are split.
    pub fn with_split_contractions(
        mut self,
        split_contractions: bool,
    ) -> Self {
        self.split_contractions = split_contractions;
        self
    }

    /// Build a [`CaptionTokenizer`] from these options.
    pub fn build(&self) -> CVResult<CaptionTokenizer> {
        CaptionTokenizer::new(self.clone())
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    CVResult,
    CapvocabError,
    tokenizer::{MIN_TOKEN_LEN_FLOOR, TokenizerOptions, normalize_caption, split_contraction},
};

static DEFAULT_TOKENIZER: LazyLock<CaptionTokenizer> = LazyLock::new(CaptionTokenizer::default);

/// Tokenize `text` with the default [`CaptionTokenizer`].
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// Deterministic caption tokenizer.
///
/// Stateless once built; safe to share between threads.
#[derive(Debug, Clone)]
pub struct CaptionTokenizer {
    options: TokenizerOptions,
    word_regex: Regex,
}

impl Default for CaptionTokenizer {
    fn default() -> Self {
        Self::new(TokenizerOptions::default()).expect("default word pattern compiles")
    }
}

impl PartialEq for CaptionTokenizer {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.options == other.options
    }
}

impl CaptionTokenizer {
    /// Build a new tokenizer.
    ///
    /// ## Errors
    /// [`CapvocabError::TokenizerSetup`] if the word pattern does not compile,
    /// or `min_token_len` is below [`MIN_TOKEN_LEN_FLOOR`].
    pub fn new(options: TokenizerOptions) -> CVResult<Self> {
        if options.min_token_len < MIN_TOKEN_LEN_FLOOR {
            return Err(CapvocabError::TokenizerSetup(format!(
                "min_token_len {} is below {MIN_TOKEN_LEN_FLOOR}",
                options.min_token_len
            )));
        }

        let word_regex = Regex::new(&options.word_pattern).map_err(|e| {
            CapvocabError::TokenizerSetup(format!(
                "word pattern {:?}: {e}",
                options.word_pattern
            ))
        })?;

        Ok(Self {
            options,
            word_regex,
        })
    }

    /// Get the options this tokenizer was built from.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Convert one caption into its ordered sequence of words.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        self.tokenize_append(text, &mut tokens);
        tokens
    }

    /// Tokenize `text`, appending the words to `tokens`.
    pub fn tokenize_append(
        &self,
        text: &str,
        tokens: &mut Vec<String>,
    ) {
        self.for_each_token(text, |token| tokens.push(token.to_string()));
    }

    /// Tokenize `text`, calling `f` on each word in order.
    pub fn for_each_token<F>(
        &self,
        text: &str,
        mut f: F,
    ) where
        F: FnMut(&str),
    {
        let normalized = normalize_caption(text);
        let min_len = self.options.min_token_len;
        let mut emit = |word: &str| {
            if word.chars().count() >= min_len {
                f(word);
            }
        };

        for mat in self.word_regex.find_iter(&normalized) {
            let word = mat.as_str();
            if self.options.split_contractions
                && let Some((head, tail)) = split_contraction(word)
            {
                emit(head);
                emit(tail);
            } else {
                emit(word);
            }
        }
    }
}

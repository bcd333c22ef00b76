//! # Word Counter

use crate::{
    tokenizer::CaptionTokenizer,
    types::{CommonHashMap, hash_map_with_capacity},
};

/// Corpus-wide word frequency counter.
///
/// Counts are global across every sample fed in, not per caption.
#[derive(Debug, Clone)]
pub struct WordCounter {
    /// The tokenizer used to split samples.
    tokenizer: CaptionTokenizer,

    /// The word counts.
    word_counts: CommonHashMap<String, usize>,
}

impl WordCounter {
    /// Create a new word counter.
    pub fn new(tokenizer: CaptionTokenizer) -> Self {
        Self {
            tokenizer,
            word_counts: hash_map_with_capacity(10_000),
        }
    }

    /// The tokenizer used to split samples.
    pub fn tokenizer(&self) -> &CaptionTokenizer {
        &self.tokenizer
    }

    /// The word counts so far.
    pub fn word_counts(&self) -> &CommonHashMap<String, usize> {
        &self.word_counts
    }

    /// Release the word counts and return them.
    pub fn release(self) -> CommonHashMap<String, usize> {
        self.word_counts
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let word_counts = &mut self.word_counts;
        self.tokenizer.for_each_token(text.as_ref(), |word| {
            match word_counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    word_counts.insert(word.to_string(), 1);
                }
            }
        });
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Select the admitted words, in id assignment order.
    ///
    /// Words with a count of at least `freq_threshold` are kept, ordered
    /// by descending count with ties broken by ascending word order;
    /// then truncated to `max_size` when one is given.
    pub fn select_words(
        &self,
        freq_threshold: usize,
        max_size: Option<usize>,
    ) -> Vec<(&str, usize)> {
        let mut candidates: Vec<(&str, usize)> = self
            .word_counts
            .iter()
            .filter(|&(_, &count)| count >= freq_threshold)
            .map(|(word, &count)| (word.as_str(), count))
            .collect();

        candidates.sort_unstable_by(|(a, a_count), (b, b_count)| {
            b_count.cmp(a_count).then_with(|| a.cmp(b))
        });

        if let Some(max_size) = max_size {
            candidates.truncate(max_size);
        }
        candidates
    }
}

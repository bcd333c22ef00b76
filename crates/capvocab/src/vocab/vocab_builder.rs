//! # Vocabulary Builder

use core::marker::PhantomData;

use crate::{
    CVResult,
    TokenType,
    tokenizer::CaptionTokenizer,
    vocab::{VocabOptions, Vocabulary, WordCounter},
};

/// One-shot [`Vocabulary`] builder.
///
/// Samples may be fed in any number of batches; [`build`](Self::build)
/// consumes the builder, so each count feeds exactly one vocabulary.
///
/// ```rust
/// use capvocab::{Vocabulary, vocab::VocabOptions};
///
/// let mut builder = VocabOptions::default().with_freq_threshold(2).init::<u32>()?;
/// builder.update_from_samples(["a cat sat", "a cat ran"]);
/// builder.update_from_samples(["a dog sat"]);
///
/// let vocab: Vocabulary = builder.build()?;
/// assert_eq!(vocab.lookup_id("cat"), Some(4));
/// assert_eq!(vocab.lookup_id("sat"), Some(5));
/// assert_eq!(vocab.lookup_id("dog"), None);
/// # Ok::<(), capvocab::CapvocabError>(())
/// ```
#[derive(Debug, Clone)]
pub struct VocabBuilder<T: TokenType = u32> {
    options: VocabOptions,
    counter: WordCounter,
    _marker: PhantomData<T>,
}

impl<T: TokenType> VocabBuilder<T> {
    /// Create a new builder.
    ///
    /// ## Errors
    /// [`CapvocabError::TokenizerSetup`](crate::CapvocabError::TokenizerSetup)
    /// if the tokenizer cannot be built.
    pub fn new(options: VocabOptions) -> CVResult<Self> {
        let tokenizer = options.tokenizer.build()?;
        Ok(Self::with_tokenizer(options, tokenizer))
    }

    pub(crate) fn with_tokenizer(
        options: VocabOptions,
        tokenizer: CaptionTokenizer,
    ) -> Self {
        Self {
            options,
            counter: WordCounter::new(tokenizer),
            _marker: PhantomData,
        }
    }

    /// The build options.
    pub fn options(&self) -> &VocabOptions {
        &self.options
    }

    /// The word counts accumulated so far.
    pub fn counter(&self) -> &WordCounter {
        &self.counter
    }

    /// Count the words of one caption.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.counter.update_from_text(text);
    }

    /// Count the words of every caption in `samples`.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.counter.update_from_samples(samples);
    }

    /// Build the vocabulary from the accumulated counts.
    ///
    /// ## Errors
    /// [`CapvocabError::VocabSizeOverflow`](crate::CapvocabError::VocabSizeOverflow)
    /// if the admitted words do not fit in `T`.
    pub fn build(self) -> CVResult<Vocabulary<T>> {
        let VocabOptions {
            freq_threshold,
            max_size,
            ..
        } = self.options;

        let words = self.counter.select_words(freq_threshold, max_size);
        log::debug!(
            "counted {} distinct words; {} pass freq_threshold={freq_threshold}, max_size={max_size:?}",
            self.counter.word_counts().len(),
            words.len(),
        );

        let mut vocab = Vocabulary::from_tokenizer(
            self.counter.tokenizer().clone(),
            freq_threshold,
            max_size,
        );
        vocab.extend_words(words.into_iter().map(|(word, _)| word))?;

        log::info!("built vocabulary with {} tokens", vocab.len());
        Ok(vocab)
    }
}

//! # Caption Vocabulary

use std::path::Path;

use crate::{
    CVResult,
    CapvocabError,
    TokenType,
    tokenizer::CaptionTokenizer,
    types::CommonHashMap,
    vocab::{
        NUM_SPECIAL_TOKENS,
        SpecialToken,
        UNK_TOKEN,
        VocabBuilder,
        VocabOptions,
        io::{load_json_vocab_path, save_json_vocab_path},
    },
};

/// Bidirectional word <-> id vocabulary for captions.
///
/// The special tokens `<PAD>`, `<START>`, `<END>`, `<UNK>` always hold ids
/// `0..4`; corpus words follow from id `4` in admission order.
///
/// `id_to_token` and `token_to_id` are exact inverses. Nothing mutates them
/// after construction, so a built vocabulary can be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: TokenType = u32> {
    tokenizer: CaptionTokenizer,
    freq_threshold: usize,
    max_size: Option<usize>,

    /// `{ id -> token }`, as a dense list.
    id_to_token: Vec<String>,

    /// `{ token -> id }`.
    token_to_id: CommonHashMap<String, T>,
}

impl<T: TokenType> Vocabulary<T> {
    /// Create a vocabulary holding only the special tokens.
    ///
    /// ## Errors
    /// [`CapvocabError::TokenizerSetup`] if the tokenizer cannot be built.
    pub fn new(options: VocabOptions) -> CVResult<Self> {
        let tokenizer = options.tokenizer.build()?;
        Ok(Self::from_tokenizer(
            tokenizer,
            options.freq_threshold,
            options.max_size,
        ))
    }

    /// Build a vocabulary from a corpus of captions in one pass.
    pub fn from_captions<I>(
        options: VocabOptions,
        captions: I,
    ) -> CVResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = VocabBuilder::new(options)?;
        builder.update_from_samples(captions);
        builder.build()
    }

    /// Populate a freshly created vocabulary from a corpus of captions.
    ///
    /// ## Errors
    /// [`CapvocabError::VocabConflict`] if the vocabulary already holds corpus words.
    pub fn build_vocabulary<I>(
        self,
        captions: I,
    ) -> CVResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if self.num_words() > 0 {
            return Err(CapvocabError::VocabConflict(format!(
                "vocabulary already built with {} words",
                self.num_words()
            )));
        }

        let options = self.options();
        let mut builder = VocabBuilder::with_tokenizer(options, self.tokenizer);
        builder.update_from_samples(captions);
        builder.build()
    }

    pub(crate) fn from_tokenizer(
        tokenizer: CaptionTokenizer,
        freq_threshold: usize,
        max_size: Option<usize>,
    ) -> Self {
        let id_to_token: Vec<String> = SpecialToken::ALL
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        let token_to_id = id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (token.clone(), Self::id_from_usize(id)))
            .collect();

        Self {
            tokenizer,
            freq_threshold,
            max_size,
            id_to_token,
            token_to_id,
        }
    }

    /// Rebuild a vocabulary from its dense `{ id -> token }` list.
    ///
    /// ## Errors
    /// [`CapvocabError::VocabConflict`] if the specials are misplaced or a token repeats;
    /// [`CapvocabError::VocabSizeOverflow`] if the list does not fit in `T`.
    pub(crate) fn from_token_list(
        tokenizer: CaptionTokenizer,
        freq_threshold: usize,
        max_size: Option<usize>,
        tokens: Vec<String>,
    ) -> CVResult<Self> {
        for special in SpecialToken::ALL {
            match tokens.get(special.id()) {
                Some(token) if token == special.as_str() => {}
                found => {
                    return Err(CapvocabError::VocabConflict(format!(
                        "expected {special} at id {}, found {found:?}",
                        special.id()
                    )));
                }
            }
        }

        let mut vocab = Self::from_tokenizer(tokenizer, freq_threshold, max_size);
        let words = tokens.into_iter().skip(NUM_SPECIAL_TOKENS);
        for word in words {
            if vocab.token_to_id.contains_key(&word) {
                return Err(CapvocabError::VocabConflict(format!(
                    "duplicate token {word:?}"
                )));
            }
            vocab.push_word(word)?;
        }
        Ok(vocab)
    }

    /// Append `words` in order, assigning sequential ids.
    ///
    /// Words spelled like a special token are skipped.
    pub(crate) fn extend_words<'a, I>(
        &mut self,
        words: I,
    ) -> CVResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: Vec<&str> = words
            .into_iter()
            .filter(|word| SpecialToken::from_token(word).is_none())
            .collect();

        let size = self.len() + words.len();
        if T::from_usize(size - 1).is_none() {
            return Err(CapvocabError::VocabSizeOverflow { size });
        }

        self.id_to_token.reserve(words.len());
        self.token_to_id.reserve(words.len());
        for word in words {
            self.push_word(word.to_string())?;
        }
        Ok(())
    }

    fn push_word(
        &mut self,
        word: String,
    ) -> CVResult<()> {
        let id = T::from_usize(self.next_id())
            .ok_or(CapvocabError::VocabSizeOverflow { size: self.len() + 1 })?;
        self.token_to_id.insert(word.clone(), id);
        self.id_to_token.push(word);
        Ok(())
    }

    fn id_from_usize(id: usize) -> T {
        // Special ids are < 4; every unsigned primitive holds them.
        T::from_usize(id).unwrap_or_else(T::zero)
    }

    /// The id of a special token.
    pub fn special_id(
        &self,
        special: SpecialToken,
    ) -> T {
        Self::id_from_usize(special.id())
    }

    /// The tokenizer used for numericalize.
    pub fn tokenizer(&self) -> &CaptionTokenizer {
        &self.tokenizer
    }

    /// Minimum corpus-wide count a word needed to be admitted.
    pub fn freq_threshold(&self) -> usize {
        self.freq_threshold
    }

    /// Cap on the number of corpus words, if any.
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// The options this vocabulary was built with.
    pub fn options(&self) -> VocabOptions {
        VocabOptions {
            freq_threshold: self.freq_threshold,
            max_size: self.max_size,
            tokenizer: self.tokenizer.options().clone(),
        }
    }

    /// The next id which would be assigned to a new word.
    pub fn next_id(&self) -> usize {
        self.id_to_token.len()
    }

    /// The number of tokens, special tokens included.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Always false; the special tokens are always present.
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// The number of corpus words.
    pub fn num_words(&self) -> usize {
        self.len() - NUM_SPECIAL_TOKENS
    }

    /// The tokens, indexed by id.
    pub fn tokens(&self) -> &[String] {
        &self.id_to_token
    }

    /// The `{ token -> id }` map.
    pub fn token_to_id(&self) -> &CommonHashMap<String, T> {
        &self.token_to_id
    }

    /// Iterate `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.id_to_token
            .iter()
            .map(|token| (self.token_to_id[token], token.as_str()))
    }

    /// Check if the vocabulary contains `token`.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Return the id for `token`, if any.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Return the token for `id`, if any.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.id_to_token.get(idx))
            .map(String::as_str)
    }

    /// Return the id for `token`, or the `<UNK>` id.
    pub fn id_or_unk(
        &self,
        token: &str,
    ) -> T {
        self.lookup_id(token)
            .unwrap_or_else(|| self.special_id(SpecialToken::Unk))
    }

    /// Convert a caption into a sequence of ids.
    ///
    /// Unknown words map to `<UNK>`. With `add_special_tokens`, the
    /// sequence is wrapped in `<START>` .. `<END>`.
    pub fn numericalize(
        &self,
        text: &str,
        add_special_tokens: bool,
    ) -> Vec<T> {
        let mut ids = Vec::new();
        if add_special_tokens {
            ids.push(self.special_id(SpecialToken::Start));
        }
        self.tokenizer
            .for_each_token(text, |word| ids.push(self.id_or_unk(word)));
        if add_special_tokens {
            ids.push(self.special_id(SpecialToken::End));
        }
        ids
    }

    /// Convert ids back into tokens.
    ///
    /// Ids outside the vocabulary render as `<UNK>`. With `remove_special`,
    /// `<PAD>`, `<START>` and `<END>` are dropped; `<UNK>` is always kept.
    pub fn decode_tokens(
        &self,
        ids: &[T],
        remove_special: bool,
    ) -> Vec<&str> {
        ids.iter()
            .filter(|&&id| {
                !remove_special
                    || id.to_usize().is_none_or(|idx| {
                        SpecialToken::ALL
                            .get(idx)
                            .is_none_or(|special| !special.is_structural())
                    })
            })
            .map(|&id| self.lookup_token(id).unwrap_or(UNK_TOKEN))
            .collect()
    }

    /// Convert ids back into a space-joined caption.
    ///
    /// See [`decode_tokens`](Self::decode_tokens).
    pub fn decode(
        &self,
        ids: &[T],
        remove_special: bool,
    ) -> String {
        self.decode_tokens(ids, remove_special).join(" ")
    }

    /// Save this vocabulary to a file.
    ///
    /// See [`save_json_vocab_path`].
    pub fn save<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> CVResult<()> {
        save_json_vocab_path(self, path)
    }

    /// Load a vocabulary from a file.
    ///
    /// See [`load_json_vocab_path`].
    pub fn load<P: AsRef<Path>>(path: P) -> CVResult<Self> {
        load_json_vocab_path(path)
    }
}

//! # Error Types
//!
//! Unknown words and ids are not errors; they map to `<UNK>` in-band.

/// Errors from capvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum CapvocabError {
    /// The word segmentation rule could not be set up.
    #[error("tokenizer setup failed: {0}")]
    TokenizerSetup(String),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent, or was used out of lifecycle order.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error; the storage could not be accessed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The data is not a valid serialized vocabulary.
    #[error("invalid vocabulary format: {0}")]
    Format(String),

    /// The caption source could not be read as a caption table.
    #[cfg(feature = "corpus")]
    #[error("corpus error: {0}")]
    Corpus(String),
}

impl From<serde_json::Error> for CapvocabError {
    fn from(err: serde_json::Error) -> Self {
        // Reader/writer failures stay I/O; everything else is a broken document.
        if err.is_io() {
            CapvocabError::Io(err.into())
        } else {
            CapvocabError::Format(err.to_string())
        }
    }
}

#[cfg(feature = "corpus")]
impl From<arrow::error::ArrowError> for CapvocabError {
    fn from(err: arrow::error::ArrowError) -> Self {
        CapvocabError::Corpus(err.to_string())
    }
}

#[cfg(feature = "corpus")]
impl From<parquet::errors::ParquetError> for CapvocabError {
    fn from(err: parquet::errors::ParquetError) -> Self {
        CapvocabError::Corpus(err.to_string())
    }
}

/// Result type for capvocab operations.
pub type CVResult<T> = core::result::Result<T, CapvocabError>;

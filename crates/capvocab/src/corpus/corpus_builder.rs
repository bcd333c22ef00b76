use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    CVResult,
    TokenType,
    corpus::CaptionSource,
    vocab::{VocabBuilder, VocabOptions, Vocabulary},
};

/// The file name a built vocabulary is saved under.
pub const VOCAB_FILE_NAME: &str = "vocabulary.json";

/// The path a vocabulary is saved to inside `output_dir`.
pub fn vocab_path<P: AsRef<Path>>(output_dir: P) -> PathBuf {
    output_dir.as_ref().join(VOCAB_FILE_NAME)
}

/// Build a vocabulary from a caption file, and save it in `output_dir`.
///
/// See [`build_vocab_from_sources`].
pub fn build_vocab_from_captions<T, P>(
    source: &CaptionSource,
    output_dir: P,
    options: VocabOptions,
) -> CVResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    build_vocab_from_sources(core::slice::from_ref(source), output_dir, options)
}

/// Build a vocabulary from caption files, and save it in `output_dir`.
///
/// `output_dir` is created if missing; the vocabulary is written to
/// [`vocab_path`]`(output_dir)`.
pub fn build_vocab_from_sources<T, P>(
    sources: &[CaptionSource],
    output_dir: P,
    options: VocabOptions,
) -> CVResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let mut builder: VocabBuilder<T> = VocabBuilder::new(options)?;

    log::info!("Reading captions:");
    for (idx, source) in sources.iter().enumerate() {
        let count = source.feed(&mut builder)?;
        log::info!("{idx}: {} ({count} captions)", source.path.display());
    }

    let vocab = builder.build()?;

    let path = vocab_path(output_dir);
    vocab.save(&path)?;

    log::info!("Vocabulary built with {} words", vocab.len());
    log::info!("Saved to {}", path.display());

    Ok(vocab)
}

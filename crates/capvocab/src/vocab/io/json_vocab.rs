//! # JSON Vocabulary IO

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    CVResult,
    CapvocabError,
    TokenType,
    tokenizer::{CaptionTokenizer, TokenizerOptions},
    vocab::Vocabulary,
};

/// The current vocabulary document version.
pub const VOCAB_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct VocabDocumentRef<'a> {
    version: u32,
    freq_threshold: usize,
    max_size: Option<usize>,
    next_id: usize,
    tokenizer: &'a TokenizerOptions,
    tokens: &'a [String],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VocabDocument {
    version: u32,
    freq_threshold: usize,
    max_size: Option<usize>,
    next_id: usize,
    #[serde(default)]
    tokenizer: TokenizerOptions,
    tokens: Vec<String>,
}

impl VocabDocument {
    fn into_vocab<T: TokenType>(self) -> CVResult<Vocabulary<T>> {
        if self.version != VOCAB_FORMAT_VERSION {
            return Err(CapvocabError::Format(format!(
                "unsupported version {} (expected {VOCAB_FORMAT_VERSION})",
                self.version
            )));
        }
        if self.next_id != self.tokens.len() {
            return Err(CapvocabError::Format(format!(
                "next_id {} does not match {} tokens",
                self.next_id,
                self.tokens.len()
            )));
        }

        let tokenizer = CaptionTokenizer::new(self.tokenizer)
            .map_err(|e| CapvocabError::Format(e.to_string()))?;

        Vocabulary::from_token_list(tokenizer, self.freq_threshold, self.max_size, self.tokens)
            .map_err(|e| match e {
                CapvocabError::VocabConflict(msg) => CapvocabError::Format(msg),
                other => other,
            })
    }
}

impl<T: TokenType> Serialize for Vocabulary<T> {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        VocabDocumentRef {
            version: VOCAB_FORMAT_VERSION,
            freq_threshold: self.freq_threshold(),
            max_size: self.max_size(),
            next_id: self.next_id(),
            tokenizer: self.tokenizer().options(),
            tokens: self.tokens(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: TokenType> Deserialize<'de> for Vocabulary<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        VocabDocument::deserialize(deserializer)?
            .into_vocab()
            .map_err(serde::de::Error::custom)
    }
}

/// Save a [`Vocabulary`] to a JSON file.
///
/// ## Errors
/// [`CapvocabError::Io`] if the file cannot be created or written.
pub fn save_json_vocab_path<T, P>(
    vocab: &Vocabulary<T>,
    path: P,
) -> CVResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_json_vocab(vocab, &mut writer)
}

/// Write a [`Vocabulary`] as JSON to a [`Write`] writer.
pub fn write_json_vocab<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> CVResult<()>
where
    T: TokenType,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, vocab)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Load a [`Vocabulary`] from a JSON file.
///
/// ## Errors
/// * [`CapvocabError::Io`] if the file cannot be opened or read.
/// * [`CapvocabError::Format`] if the contents are not a valid vocabulary.
pub fn load_json_vocab_path<T, P>(path: P) -> CVResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    read_json_vocab(reader)
}

/// Read a [`Vocabulary`] from a JSON [`Read`] stream.
pub fn read_json_vocab<T, R>(reader: R) -> CVResult<Vocabulary<T>>
where
    T: TokenType,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;
    use crate::vocab::VocabOptions;

    fn sample_vocab() -> Vocabulary {
        Vocabulary::from_captions(
            VocabOptions::default()
                .with_freq_threshold(2)
                .with_max_size(Some(10)),
            [
                "A dog runs on the grass.",
                "A brown dog runs.",
                "Two cats sleep on the sofa.",
                "The cats play on the grass!",
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_save_load_json() {
        let vocab = sample_vocab();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocabulary.json");

                vocab.save(&path).expect("Failed to save vocab");

                let loaded: Vocabulary = Vocabulary::load(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);
                assert_eq!(loaded.token_to_id(), vocab.token_to_id());
                assert_eq!(loaded.tokens(), vocab.tokens());
                assert_eq!(loaded.freq_threshold(), 2);
                assert_eq!(loaded.max_size(), Some(10));
                assert_eq!(loaded.next_id(), vocab.next_id());

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_round_trip_in_memory() {
        let vocab = sample_vocab();

        let mut buf: Vec<u8> = Vec::new();
        write_json_vocab(&vocab, &mut buf).unwrap();

        let loaded: Vocabulary<u16> = read_json_vocab(buf.as_slice()).unwrap();
        assert_eq!(loaded.tokens(), vocab.tokens());
        assert_eq!(
            &loaded.tokens()[4..],
            &["the", "on", "cats", "dog", "grass", "runs"]
        );
        assert_eq!(loaded.numericalize("the dog runs", true), vec![1u16, 4, 7, 9, 2]);
    }

    #[test]
    fn test_load_missing_file_is_io() {
        let dir = tempdir::TempDir::new("vocab_test").unwrap();
        let err = load_json_vocab_path::<u32, _>(dir.path().join("missing.json")).unwrap_err();
        match err {
            CapvocabError::Io(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_save_unwritable_is_io() {
        let dir = tempdir::TempDir::new("vocab_test").unwrap();
        let path = dir.path().join("no_such_dir").join("vocabulary.json");
        assert!(matches!(
            sample_vocab().save(path),
            Err(CapvocabError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_documents_are_format() {
        let cases = [
            "",
            "not json",
            "[1, 2, 3]",
            r#"{"version": 1}"#,
            r#"{"version": 2, "freq_threshold": 1, "max_size": null, "next_id": 4,
                "tokens": ["<PAD>", "<START>", "<END>", "<UNK>"]}"#,
            r#"{"version": 1, "freq_threshold": 1, "max_size": null, "next_id": 5,
                "tokens": ["<PAD>", "<START>", "<END>", "<UNK>"]}"#,
            r#"{"version": 1, "freq_threshold": 1, "max_size": null, "next_id": 4,
                "tokens": ["<START>", "<PAD>", "<END>", "<UNK>"]}"#,
            r#"{"version": 1, "freq_threshold": 1, "max_size": null, "next_id": 6,
                "tokens": ["<PAD>", "<START>", "<END>", "<UNK>", "cat", "cat"]}"#,
            r#"{"version": 1, "freq_threshold": 1, "max_size": null, "next_id": 4,
                "tokenizer": {"word_pattern": "(oops"},
                "tokens": ["<PAD>", "<START>", "<END>", "<UNK>"]}"#,
            r#"{"version": 1, "freq_threshold": 1, "max_size": null, "next_id": 4,
                "tokenizer": {"min_token_len": 0},
                "tokens": ["<PAD>", "<START>", "<END>", "<UNK>"]}"#,
        ];

        for case in cases {
            match read_json_vocab::<u32, _>(case.as_bytes()) {
                Err(CapvocabError::Format(_)) => {}
                other => panic!("expected format error for {case:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_minimal_document() {
        let doc = r#"{"version": 1, "freq_threshold": 3, "max_size": null, "next_id": 5,
            "tokens": ["<PAD>", "<START>", "<END>", "<UNK>", "cat"]}"#;
        let vocab: Vocabulary = read_json_vocab(doc.as_bytes()).unwrap();
        assert_eq!(vocab.lookup_id("cat"), Some(4));
        assert_eq!(vocab.freq_threshold(), 3);
        assert_eq!(vocab.tokenizer().options(), &TokenizerOptions::default());
    }
}

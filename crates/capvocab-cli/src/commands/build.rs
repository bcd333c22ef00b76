use capvocab::{
    Vocabulary,
    corpus::{CaptionFormat, CaptionSource, DEFAULT_CAPTION_COLUMN, build_vocab_from_sources},
    tokenizer::{DEFAULT_MIN_TOKEN_LEN, TokenizerOptions},
    vocab::{DEFAULT_FREQ_THRESHOLD, VocabOptions},
};

use crate::logging::LogArgs;

/// File formats for the build command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FileFormat {
    /// Guess from the file extension.
    Auto,

    /// CSV tables, with a header row.
    Csv,

    /// Parquet tables.
    Parquet,

    /// Simple text files; one caption per line.
    Text,
}

/// Args for the build command.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Input files.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[arg(long, default_value = "auto")]
    input_format: FileFormat,

    /// Caption column for tabular inputs.
    #[arg(long, default_value = DEFAULT_CAPTION_COLUMN)]
    column: String,

    /// Minimum corpus-wide count for a word to be admitted.
    #[arg(long, default_value_t = DEFAULT_FREQ_THRESHOLD)]
    freq_threshold: usize,

    /// Maximum number of corpus words; special tokens are not counted.
    #[arg(long)]
    max_size: Option<usize>,

    /// Minimum word length, in characters.
    #[arg(long, default_value_t = DEFAULT_MIN_TOKEN_LEN)]
    min_token_len: usize,

    /// Output directory; the vocabulary is written to `vocabulary.json` inside it.
    #[arg(long, default_value = ".")]
    output_dir: String,
}

impl BuildArgs {
    fn sources(&self) -> Vec<CaptionSource> {
        self.files
            .iter()
            .map(|path| {
                let source = CaptionSource::from_path(path).with_column(self.column.clone());
                match self.input_format {
                    FileFormat::Auto => source,
                    FileFormat::Csv => source.with_format(CaptionFormat::Csv),
                    FileFormat::Parquet => source.with_format(CaptionFormat::Parquet),
                    FileFormat::Text => source.with_format(CaptionFormat::Text),
                }
            })
            .collect()
    }

    fn options(&self) -> VocabOptions {
        VocabOptions::default()
            .with_freq_threshold(self.freq_threshold)
            .with_max_size(self.max_size)
            .with_tokenizer(TokenizerOptions::default().with_min_token_len(self.min_token_len))
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;
        self.build_vocab()?;
        Ok(())
    }

    /// Build and save the vocabulary; `run` without the logger install.
    fn build_vocab(&self) -> Result<Vocabulary, Box<dyn std::error::Error>> {
        log::info!("Building vocabulary...");
        let vocab: Vocabulary =
            build_vocab_from_sources(&self.sources(), &self.output_dir, self.options())?;

        log::info!(
            "{} corpus words (freq_threshold={}, max_size={:?})",
            vocab.num_words(),
            vocab.freq_threshold(),
            vocab.max_size()
        );
        Ok(vocab)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use capvocab::corpus::vocab_path;
    use clap::Parser;

    use super::*;
    use crate::vocab_selector::VocabSelectorArgs;

    #[derive(clap::Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        build: BuildArgs,
    }

    #[test]
    fn test_sources_and_options() {
        let cli = TestCli::parse_from([
            "test",
            "a.csv",
            "b.txt",
            "--column",
            "text",
            "--freq-threshold",
            "2",
            "--max-size",
            "100",
        ]);

        let sources = cli.build.sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].format, CaptionFormat::Csv);
        assert_eq!(sources[1].format, CaptionFormat::Text);
        assert!(sources.iter().all(|s| s.column == "text"));

        let options = cli.build.options();
        assert_eq!(options.freq_threshold, 2);
        assert_eq!(options.max_size, Some(100));
        assert_eq!(options.tokenizer.min_token_len, 2);
    }

    #[test]
    fn test_forced_format() {
        let cli = TestCli::parse_from(["test", "a.csv", "--input-format", "parquet"]);
        assert_eq!(cli.build.sources()[0].format, CaptionFormat::Parquet);
    }

    #[test]
    fn test_build_writes_loadable_vocab() {
        let dir = tempdir::TempDir::new("capvocab_cli").unwrap();
        let csv_path = dir.path().join("captions.csv");
        fs::write(
            &csv_path,
            "image,caption\n1.jpg,A cat sat.\n2.jpg,\"A cat, ran\"\n3.jpg,A dog sat\n",
        )
        .unwrap();
        let output_dir = dir.path().join("artifacts");

        let cli = TestCli::parse_from([
            "test",
            csv_path.to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--freq-threshold",
            "2",
        ]);
        let built = cli.build.build_vocab().unwrap();

        let loaded: Vocabulary = Vocabulary::load(vocab_path(&output_dir)).unwrap();
        assert_eq!(loaded, built);
        assert_eq!(loaded.lookup_id("cat"), Some(4));
        assert_eq!(loaded.lookup_id("sat"), Some(5));
        assert_eq!(loaded.num_words(), 2);

        let selector = VocabSelectorArgs {
            vocab: vocab_path(&output_dir),
        };
        assert_eq!(selector.load_vocab().unwrap(), built);
    }

    #[test]
    fn test_build_rejects_short_min_token_len() {
        let dir = tempdir::TempDir::new("capvocab_cli").unwrap();
        let text_path = dir.path().join("captions.txt");
        fs::write(&text_path, "a b cat\n").unwrap();

        let cli = TestCli::parse_from([
            "test",
            text_path.to_str().unwrap(),
            "--output-dir",
            dir.path().to_str().unwrap(),
            "--min-token-len",
            "1",
        ]);
        assert!(cli.build.build_vocab().is_err());
        assert!(!vocab_path(dir.path()).exists());
    }
}

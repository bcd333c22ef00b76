use std::io::Write;

use capvocab::Vocabulary;

use crate::{logging::LogArgs, vocab_selector::VocabSelectorArgs};

/// Args for the info command.
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub vocab: VocabSelectorArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of leading entries to list.
    #[arg(long, default_value_t = 10)]
    pub head: usize,
}

impl InfoArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;
        self.execute(&mut std::io::stdout().lock())
    }

    fn execute(
        &self,
        out: &mut dyn Write,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;
        write_info(&vocab, self.head, out)?;
        Ok(())
    }
}

/// Describe `vocab`, listing the first `head` entries.
pub fn write_info(
    vocab: &Vocabulary,
    head: usize,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(out, "size: {}", vocab.len())?;
    writeln!(out, "words: {}", vocab.num_words())?;
    writeln!(out, "freq_threshold: {}", vocab.freq_threshold())?;
    match vocab.max_size() {
        Some(max_size) => writeln!(out, "max_size: {max_size}")?,
        None => writeln!(out, "max_size: none")?,
    }
    for (id, token) in vocab.iter().take(head) {
        writeln!(out, "{id}\t{token}")?;
    }
    out.flush()
}

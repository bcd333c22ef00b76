use std::io::{BufRead, Write};

use capvocab::Vocabulary;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_selector::VocabSelectorArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub vocab: VocabSelectorArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Do not wrap each caption in `<START>` .. `<END>`.
    #[arg(long)]
    pub no_special: bool,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;
        self.execute()
    }

    pub(crate) fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let count = encode_lines(&vocab, &mut reader, &mut writer, !self.no_special)?;
        log::info!("encoded {count} captions");
        Ok(())
    }
}

/// Write one line of space-separated ids per input caption.
///
/// ## Returns
/// The number of captions encoded.
pub fn encode_lines(
    vocab: &Vocabulary,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    add_special_tokens: bool,
) -> std::io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let ids = vocab.numericalize(&line?, add_special_tokens);
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        writeln!(writer, "{}", ids.join(" "))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

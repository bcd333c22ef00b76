use std::io::{BufRead, Write};

use capvocab::Vocabulary;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_selector::VocabSelectorArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub vocab: VocabSelectorArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Keep `<PAD>`, `<START>` and `<END>` in the output.
    #[arg(long)]
    pub keep_special: bool,
}

impl DecodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;
        self.execute()
    }

    pub(crate) fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = self.vocab.load_vocab()?;
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let count = decode_lines(&vocab, &mut reader, &mut writer, !self.keep_special)?;
        log::info!("decoded {count} captions");
        Ok(())
    }
}

/// Parse a line of whitespace-separated ids.
pub fn parse_ids(line: &str) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    line.split_whitespace()
        .map(|word| -> Result<u32, Box<dyn std::error::Error>> {
            Ok(word
                .parse::<u32>()
                .map_err(|e| format!("invalid id {word:?}: {e}"))?)
        })
        .collect()
}

/// Write one decoded caption per input line of ids.
///
/// ## Returns
/// The number of captions decoded.
pub fn decode_lines(
    vocab: &Vocabulary,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    remove_special: bool,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut count = 0;
    for (idx, line) in reader.lines().enumerate() {
        let ids = parse_ids(&line?).map_err(|e| format!("line {}: {e}", idx + 1))?;
        writeln!(writer, "{}", vocab.decode(&ids, remove_special))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

use std::path::PathBuf;

use capvocab::Vocabulary;

/// Vocabulary selection arg group.
#[derive(clap::Args, Debug)]
pub struct VocabSelectorArgs {
    /// Path to a saved vocabulary.
    #[arg(long, default_value = "vocabulary.json")]
    pub vocab: PathBuf,
}

impl VocabSelectorArgs {
    /// Load the selected vocabulary.
    pub fn load_vocab(&self) -> Result<Vocabulary, Box<dyn std::error::Error>> {
        log::info!("loading vocabulary: {}", self.vocab.display());
        let vocab = Vocabulary::load(&self.vocab)?;
        log::debug!("loaded {} tokens", vocab.len());
        Ok(vocab)
    }
}

mod build;
mod decode;
mod encode;
mod info;

/// Subcommands for capvocab.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from caption files.
    Build(build::BuildArgs),

    /// Convert captions (one per line) to id sequences.
    Encode(encode::EncodeArgs),

    /// Convert id sequences (one per line) back to captions.
    Decode(decode::DecodeArgs),

    /// Describe a saved vocabulary.
    Info(info::InfoArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
        }
    }
}

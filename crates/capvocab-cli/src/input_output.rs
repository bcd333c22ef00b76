use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// The path argument which selects stdin / stdout.
const STDIO_MARKER: &str = "-";

/// The file behind an optional path argument; `None` means stdio.
fn file_path(arg: Option<&Path>) -> Option<&Path> {
    arg.filter(|path| path.as_os_str() != STDIO_MARKER)
}

fn with_path_context(
    err: io::Error,
    path: &Path,
) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {err}", path.display()))
}

/// Caption / id input; one record per line.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; stdin when absent or "-".
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a line reader over the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        match file_path(self.input.as_deref()) {
            Some(path) => {
                let file = File::open(path).map_err(|e| with_path_context(e, path))?;
                log::debug!("reading {}", path.display());
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }
}

/// Caption / id output; one record per line.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file, truncated if present; stdout when absent or "-".
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a buffered writer over the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        match file_path(self.output.as_deref()) {
            Some(path) => {
                let file = File::create(path).map_err(|e| with_path_context(e, path))?;
                log::debug!("writing {}", path.display());
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "srcpack",
    version,
    about = "Bundle source files into a single annotated output file"
)]
pub struct Cli {
    /// Directory to walk recursively.
    pub root: PathBuf,
    /// File the bundle is written to (created or overwritten).
    pub output: PathBuf,
    /// Only files whose name ends with this suffix are bundled.
    #[arg(long = "suffix", default_value = ".js")]
    pub suffix: String,
}

/// Helper entry point so `main` can stay minimal. Argument errors print the
/// usage text to standard output and terminate with status 1.
pub fn parse() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

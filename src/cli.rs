use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Command-line front end for the fsbox helpers.
#[derive(Parser, Debug)]
#[command(name = "fsbox", version, about = "Config, artifact, and image file helpers")]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect and convert YAML/TOML/JSON config files.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Create directories (and their parents) if missing.
    Mkdir(MkdirArgs),
    /// Print the approximate size of a file in KB.
    Size { path: Utf8PathBuf },
    /// Print a file as base64, or write the base64 text to a file.
    Encode(EncodeArgs),
    /// Decode base64 text into a file.
    Decode(DecodeArgs),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the parsed config as JSON.
    Show { path: Utf8PathBuf },
    /// Print the value at a dotted key path such as `training.epochs`.
    Get { path: Utf8PathBuf, key: String },
    /// Save the parsed config as an indented JSON file.
    Convert {
        path: Utf8PathBuf,
        output: Utf8PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct MkdirArgs {
    #[arg(required = true)]
    pub paths: Vec<Utf8PathBuf>,
    /// Skip the per-directory log line.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    pub input: Utf8PathBuf,
    #[arg(short = 'o', long = "output")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding base64 text, or `-` for stdin.
    pub input: Utf8PathBuf,
    pub output: Utf8PathBuf,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigLayer;

#[derive(Parser, Debug)]
#[command(
    name = "czmoji",
    about = "Compose conventional commit messages with an emoji header",
    version,
    after_help = "The message is printed to stdout (or written to --output); committing is left to the caller."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read answers from a JSON file instead of prompting
    #[arg(long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Write the message to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wrap width for body, breaking change and issues
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub max_line_width: Option<usize>,

    /// Maximum length of the header line
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub max_header_width: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration
    Config {
        /// Print the global config file path instead
        #[arg(long)]
        path: bool,
    },
    /// List the selectable commit types
    Types,
    /// Print the question schedule as JSON
    Questions,
}

impl Cli {
    /// Command-line overrides, the highest configuration layer.
    pub fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            max_line_width: self.max_line_width,
            max_header_width: self.max_header_width,
            ..ConfigLayer::default()
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

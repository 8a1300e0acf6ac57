use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the SBMLErrorCodes constants interface
    Codes(GenerateArgs),
    /// Generate the SBMLErrorMessage bundle
    Messages(GenerateArgs),
    /// Generate the SBMLErrorShortMessage bundle
    ShortMessages(GenerateArgs),
    /// Generate every Java artifact into one directory
    All(AllArgs),
    /// Build the error table JSON from a validation-library severity dump
    Extract(ExtractArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input error table .json file
    pub input: PathBuf,
    /// Output directory (stdout when omitted)
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub config: GeneratorConfig,
}

#[derive(Args, Debug)]
pub struct AllArgs {
    /// Input error table .json file
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    #[command(flatten)]
    pub config: GeneratorConfig,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Input severity dump .json file
    pub input: PathBuf,
    /// Output directory (stdout when omitted)
    pub output: Option<PathBuf>,
}

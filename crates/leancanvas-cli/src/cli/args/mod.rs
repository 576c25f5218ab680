use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod common;
pub use common::*;

#[derive(Parser)]
#[command(
    name = "leancanvas",
    version,
    about = "Lean Canvas 자동 작성 & 피드백: fill in the nine sections and ask a local model for feedback"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive session: edit sections and request feedback as often as you like
    Fill(FillArgs),
    /// Request feedback once for a canvas file
    Submit(SubmitArgs),
    /// Write a canvas file pre-filled with the placeholder guidance
    Template(TemplateArgs),
    /// About this tool
    About,
    /// Print version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct FillArgs {
    /// Start from a saved canvas instead of the placeholders
    #[arg(long)]
    pub canvas: Option<PathBuf>,

    /// Edit sections in $EDITOR (multi-line) instead of a single-line prompt
    #[arg(long)]
    pub editor: bool,

    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Canvas YAML file (missing sections keep their placeholder text)
    #[arg(long)]
    pub canvas: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub endpoint: EndpointArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct TemplateArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, requires = "output")]
    pub force: bool,
}

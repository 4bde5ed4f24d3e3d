use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sketchgrade",
    version,
    about = "Quality scoring for generated website code"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Score an exported page: a directory of html/css/js files")]
    Check(CheckArgs),
    #[command(about = "Parse a raw model reply and score the code it contains")]
    Response(ResponseArgs),
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub html: Option<PathBuf>,
    #[arg(long)]
    pub css: Option<PathBuf>,
    #[arg(long)]
    pub js: Option<PathBuf>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ResponseArgs {
    #[arg(help = "File holding the reply text, or - for stdin")]
    pub file: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

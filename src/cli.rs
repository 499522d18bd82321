use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "summary-compare")]
#[command(about = "Compare an actual summary with a generated summary", long_about = None)]
pub struct Cli {
    /// Log comparison details to stderr.
    #[arg(long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare one pair of summaries.
    Compare(CompareArgs),
    /// Compare every file under a directory with its counterpart in another.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("actual_source").required(true).args(["actual", "actual_file"])))]
#[command(group(ArgGroup::new("generated_source").required(true).args(["generated", "generated_file"])))]
pub struct CompareArgs {
    /// Actual (reference) summary text.
    #[arg(long)]
    pub actual: Option<String>,
    /// File holding the actual summary.
    #[arg(long)]
    pub actual_file: Option<PathBuf>,
    /// Generated (candidate) summary text.
    #[arg(long)]
    pub generated: Option<String>,
    /// File holding the generated summary.
    #[arg(long)]
    pub generated_file: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory of actual summaries.
    #[arg(long)]
    pub actual_dir: PathBuf,
    /// Directory of generated summaries, mirroring the actual layout.
    #[arg(long)]
    pub generated_dir: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Write the manifest here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Fail on the first pair that cannot be compared.
    #[arg(long)]
    pub strict: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

pub mod batch;
pub mod cli;
pub mod compare;
pub mod input;
pub mod logging;
pub mod render;
pub mod report;
pub mod tokenize;

use anyhow::{Context, Result};
use cli::{BatchArgs, Cli, Commands, CompareArgs};
use input::InputSource;

pub use compare::{CompareError, common_phrases, common_words, compare};
pub use report::{ComparisonReport, SummaryKind};
pub use tokenize::{ngrams, tokenize};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);
    match cli.command {
        Commands::Compare(args) => run_compare(args),
        Commands::Batch(args) => run_batch(&args),
    }
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let actual = InputSource::from_args(args.actual_file, args.actual)
        .context("an actual summary is required (--actual or --actual-file)")?;
    let generated = InputSource::from_args(args.generated_file, args.generated)
        .context("a generated summary is required (--generated or --generated-file)")?;
    tracing::debug!(
        actual = %actual.describe(),
        generated = %generated.describe(),
        "loading summaries"
    );

    let report = compare(&actual.read()?, &generated.read()?)?;
    let rendered = render::render_report(&report, args.format)?;
    render::emit(&rendered, args.out.as_deref())
}

fn run_batch(args: &BatchArgs) -> Result<()> {
    let config = batch::BatchConfig {
        actual_dir: &args.actual_dir,
        generated_dir: &args.generated_dir,
        strict: args.strict,
    };
    let manifest = batch::compare_dirs(&config)?;
    let rendered = render::render_batch(&manifest, args.format)?;
    render::emit(&rendered, args.out.as_deref())
}

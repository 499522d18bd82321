use clap::Parser;
use summary_compare::cli::Cli;
use summary_compare::run;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}

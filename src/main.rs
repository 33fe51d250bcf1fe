mod eval;
mod lex;
mod num;
mod ops;
mod parse;
mod prompt;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Simple interactive command-line calculator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// do not print the welcome banner
    #[arg(short, long)]
    quiet: bool,

    /// print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    prompt::run(cli.quiet)
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        true => EnvFilter::new("warn,calcline=debug"),
        false => EnvFilter::new("warn"),
    });

    fmt::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

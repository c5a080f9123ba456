use clap::{ArgAction, Parser};
use tracing_subscriber::filter::LevelFilter;

use text_combiner::commands::combine::{CombineCommand, CombineOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "text-combiner",
    author,
    version,
    about = "Combine text files recursively",
    long_about = "Walks a directory tree and concatenates every recognized text file into a single report inside that directory"
)]
struct Cli {
    #[command(flatten)]
    combine: CombineCommand,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match handle_combine(&cli.combine) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    // The fmt subscriber also installs the `log` bridge for library records.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_combine(cmd: &CombineCommand) -> anyhow::Result<i32> {
    let outcome = cmd.execute()?;
    if cmd.strict && outcome.has_failures() {
        return Ok(2);
    }
    Ok(0)
}

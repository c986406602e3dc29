//! Grows an ID3 tree from a behavior log and prints it.
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use id3tree::prelude::*;
use id3tree::logging;


#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Behavior log, one `c k f s Label` record per line.
    file: PathBuf,

    /// Base of the logarithm used for entropy.
    #[arg(long, value_enum, default_value_t = Base::Ten)]
    base: Base,

    /// Grow the two subtrees of each split in parallel.
    #[arg(long)]
    parallel: bool,

    /// Also write the tree as a Graphviz dot file.
    #[arg(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Do not print the summary.
    #[arg(short, long)]
    quiet: bool,

    /// Raise the log level (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}


#[derive(Clone, Copy, ValueEnum)]
enum Base {
    #[value(name = "2")]
    Two,
    #[value(name = "e")]
    E,
    #[value(name = "10")]
    Ten,
}


impl From<Base> for LogBase {
    fn from(base: Base) -> Self {
        match base {
            Base::Two => LogBase::Two,
            Base::E => LogBase::E,
            Base::Ten => LogBase::Ten,
        }
    }
}


fn run(args: &Args) -> io::Result<()> {
    let dataset = DatasetReader::new()
        .file(&args.file)
        .read()?;
    if dataset.is_empty() {
        log::warn!("{} has no records", args.file.display());
    }

    let learner = Id3Builder::new()
        .log_base(args.base.into())
        .parallel(args.parallel)
        .build();

    let now = Instant::now();
    let tree = learner.produce(&dataset);
    let elapsed = now.elapsed();

    println!("{tree}");

    if let Some(path) = &args.dot {
        tree.to_dot_file(path)?;
        log::info!("wrote {}", path.display());
    }

    if !args.quiet {
        logging::print_summary(&learner, &dataset, &tree, elapsed);
    }
    Ok(())
}


fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    logging::init(level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "[ERR]".bold().red());
            ExitCode::FAILURE
        },
    }
}

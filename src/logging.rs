//! Logger setup and the colored run summary.
use colored::Colorize;
use log::LevelFilter;

use std::time::Duration;

use crate::learner::TreeLearner;
use crate::sample::Dataset;
use crate::tree::DecisionTree;


const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Install `env_logger` with `level` as the default filter.
/// `RUST_LOG` overrides the default.
/// Calling this function twice has no further effect.
pub fn init(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}


/// Print the learner settings and statistics of the grown tree.
pub fn print_summary<L>(
    learner: &L,
    dataset: &Dataset,
    tree: &DecisionTree,
    elapsed: Duration,
)
    where L: TreeLearner,
{
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "STATS".bold(), "",
    );
    eprintln!(
        "\n{header}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
        "Learner".bold(),
        learner.name().bold().green(),
    );

    if let Some(info) = learner.info() {
        let line = info.into_iter()
            .map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        eprintln!("{line}");
    }

    let stats = [
        ("# of records", dataset.size().to_string()),
        ("Depth", tree.depth().to_string()),
        ("# of leaves", tree.n_leaves().to_string()),
        ("Train accuracy", format!("{:.5}", tree.accuracy(dataset))),
        ("Time", time_format(elapsed.as_millis())),
    ];
    for (key, val) in stats {
        eprintln!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            key.bold(),
            val.bold().green(),
        );
    }
    eprintln!("{:=^FULL_WIDTH$}\n", "".bold());
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    format!(" {:0>2}m {:0>2}s", min, sec)
}

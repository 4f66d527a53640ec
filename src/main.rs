use clap::Parser;
use rand::Rng;

use dedup::Strategy;

/// Which strategy to run from the command line. `All` runs every strategy and compares them.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, clap::ValueEnum)]
enum StrategyArg {
    Ordered,
    Unordered,
    #[value(alias = "keep_order")]
    KeepOrder,
    #[value(alias = "simple")]
    Custom,
    #[default]
    All,
}

impl StrategyArg {
    fn strategy(&self) -> Option<Strategy> {
        match self {
            Self::Ordered => Some(Strategy::Ordered),
            Self::Unordered => Some(Strategy::Unordered),
            Self::KeepOrder => Some(Strategy::KeepOrder),
            Self::Custom => Some(Strategy::Custom),
            Self::All => None,
        }
    }
}

/// Contains information parsed from the command-line invocation of dedup. The Clap macros
/// provide a fancy way to automatically construct a command-line argument parser.
#[derive(Parser, Debug)]
#[command(about = "Remove duplicate integers, several ways")]
struct CmdOptions {
    /// Values to deduplicate. Defaults to a built-in sample.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i32>,
    /// Generate this many random values instead
    #[arg(short, long, conflicts_with = "values")]
    random: Option<usize>,
    /// Exclusive upper bound for random values
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(1..))]
    max: i32,
    /// Strategy to run; "all" runs every strategy and compares the results
    #[arg(short, long, value_enum, default_value_t)]
    strategy: StrategyArg,
}

/// Sample input with plenty of repeats, used when no values are given.
fn sample_input() -> Vec<i32> {
    vec![
        1, 2, 34, 34, 25, 1, 45, 3, 26, 85, 4, 34, 86, 25, 43, 2, 1, 10000, 11, 16, 19, 1, 18, 4,
        9, 3, 20, 17, 8, 15, 6, 2, 5, 10, 14, 12, 13, 7, 8, 9, 1, 2, 15, 12, 18, 10, 14, 20, 17,
        16, 3, 6, 19, 13, 5, 11, 4, 7, 19, 16, 5, 9, 12, 3, 20, 7, 15, 17, 10, 6, 1, 8, 18, 4, 14,
        13, 2, 11,
    ]
}

fn main() {
    // Default to info-level logs; set RUST_LOG=debug or trace to watch the strategies work.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
    let options = CmdOptions::parse();

    let input = match options.random {
        Some(count) => {
            let mut rng = rand::thread_rng();
            (0..count)
                .map(|_| rng.gen_range(0..options.max))
                .collect::<Vec<i32>>()
        }
        None if options.values.is_empty() => sample_input(),
        None => options.values,
    };
    log::info!("Deduplicating {} values", input.len());

    let strategy = match options.strategy.strategy() {
        Some(strategy) => strategy,
        None => {
            for matched in compare_strategies(&input) {
                println!("{}", matched);
            }
            return;
        }
    };
    let output = strategy.apply(&input);
    log::info!("{} kept {} of {} values", strategy, output.len(), input.len());
    println!(
        "{}",
        output
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    );
}

/// Runs every strategy and reports whether `ordered == keep-order`, `unordered == keep-order`
/// and `ordered == custom`. The first and last should hold; the middle one usually won't.
fn compare_strategies(input: &[i32]) -> [bool; 3] {
    let ordered = Strategy::Ordered.apply(input);
    let keep_order = Strategy::KeepOrder.apply(input);
    let unordered = Strategy::Unordered.apply(input);
    let custom = Strategy::Custom.apply(input);

    [ordered == keep_order, unordered == keep_order, ordered == custom]
}

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use mergecount::{
    ops::{Greater, GreaterOrEqual, ScaledGreater},
    random::{Gen, Seq},
    seq::{MergeCounter, SmallerAfter, Strategy},
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pair-count")]
#[command(about = "Count related pairs while merge-sorting a sequence")]
#[command(version)]
struct Cli {
    /// Input values (omit when using --random)
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Relation between an earlier and a later element
    #[arg(short, long, value_enum, default_value_t = RelationArg::Inversions)]
    relation: RelationArg,

    /// k in `a > k * b` for reverse pairs
    #[arg(short = 'k', long, default_value_t = 2)]
    factor: u32,

    /// Order in which runs are merged
    #[arg(long, value_enum, default_value_t = StrategyArg::TopDown)]
    strategy: StrategyArg,

    /// Also print the count for each element
    #[arg(long)]
    per_element: bool,

    /// Generate N random values instead of reading VALUES
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, env = "PAIR_COUNT_SEED", default_value_t = 0)]
    seed: u64,

    /// Random values are drawn from -MAX..=MAX
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i64,

    /// Show debug logs (sets RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RelationArg {
    /// a > b
    Inversions,
    /// a > k * b
    ReversePairs,
    /// a >= b
    GreaterOrEqual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    TopDown,
    BottomUp,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::TopDown => Strategy::TopDown,
            StrategyArg::BottomUp => Strategy::BottomUp,
        }
    }
}

fn input(cli: &Cli) -> Result<Vec<i64>> {
    match (cli.random, cli.values.is_empty()) {
        (Some(_), false) => bail!("pass either VALUES or --random, not both"),
        (None, true) => bail!("no input; pass VALUES or --random N"),
        (None, false) => Ok(cli.values.clone()),
        (Some(len), true) => {
            if cli.max < 0 {
                bail!("--max must not be negative, got {}", cli.max);
            }
            let mut rng = ChaCha20Rng::seed_from_u64(cli.seed);
            Ok(Seq { bound: -cli.max..=cli.max, len }.generate(&mut rng))
        }
    }
}

fn per_element(values: &[i64], cli: &Cli) -> Vec<u64> {
    match cli.relation {
        RelationArg::Inversions => values.smaller_after(),
        RelationArg::ReversePairs => {
            values.related_after(ScaledGreater(cli.factor))
        }
        RelationArg::GreaterOrEqual => values.related_after(GreaterOrEqual),
    }
}

fn count_and_sort(values: &mut [i64], cli: &Cli) -> u64 {
    let mut mc = MergeCounter::with_capacity(values.len())
        .with_strategy(cli.strategy.into());
    match cli.relation {
        RelationArg::Inversions => mc.count_and_sort(values, Greater),
        RelationArg::ReversePairs => {
            mc.count_and_sort(values, ScaledGreater(cli.factor))
        }
        RelationArg::GreaterOrEqual => {
            mc.count_and_sort(values, GreaterOrEqual)
        }
    }
}

fn join<T: ToString>(a: &[T]) -> String {
    a.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // Log to stderr to keep stdout for results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut values = input(&cli)?;
    tracing::info!(len = values.len(), relation = ?cli.relation, "counting");

    let per = cli.per_element.then(|| per_element(&values, &cli));
    let count = count_and_sort(&mut values, &cli);

    println!("count: {count}");
    println!("sorted: {}", join(&values));
    if let Some(per) = per {
        println!("per element: {}", join(&per));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let args = std::iter::once("pair-count").chain(args.iter().copied());
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn literal_values() {
        let cli = parse(&["5", "-4", "3"]);
        assert_eq!(cli.relation, RelationArg::Inversions);
        let mut values = input(&cli).unwrap();
        assert_eq!(values, [5, -4, 3]);
        assert_eq!(count_and_sort(&mut values, &cli), 2);
        assert_eq!(values, [-4, 3, 5]);
    }

    #[test]
    fn reverse_pairs() {
        let cli = parse(&["-r", "reverse-pairs", "1", "3", "2", "3", "1"]);
        let mut values = input(&cli).unwrap();
        assert_eq!(per_element(&values, &cli), [0, 1, 0, 1, 0]);
        assert_eq!(count_and_sort(&mut values, &cli), 2);

        let cli = parse(&["-r", "reverse-pairs", "-k", "1", "3", "2", "1"]);
        assert_eq!(count_and_sort(&mut input(&cli).unwrap(), &cli), 3);
    }

    #[test]
    fn random_input() {
        let cli = parse(&["--random", "50", "--seed", "7", "--max", "5"]);
        let a = input(&cli).unwrap();
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|x| (-5..=5).contains(x)));
        assert_eq!(a, input(&cli).unwrap());

        let mut td = a.clone();
        let mut bu = a.clone();
        let bottom_up = parse(&["--random", "50", "--strategy", "bottom-up"]);
        assert_eq!(
            count_and_sort(&mut td, &cli),
            count_and_sort(&mut bu, &bottom_up),
        );
    }

    #[test]
    fn bad_input() {
        assert!(input(&parse(&[])).is_err());
        assert!(input(&parse(&["--random", "3", "1", "2"])).is_err());
        assert!(input(&parse(&["--random", "3", "--max=-1"])).is_err());
        assert!(Cli::try_parse_from(["pair-count", "-r", "nope", "1"]).is_err());
    }
}

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};

use intervalmath::{Interval, Reciprocal};

/// Command-line calculator for closed intervals
///
/// Intervals are written as `start,end`, optionally in brackets, e.g.
/// `[1,2]` or `-inf,0`.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Adds two intervals
    Add {
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        a: Interval,
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        b: Interval,
    },

    /// Subtracts the second interval from the first
    Sub {
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        a: Interval,
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        b: Interval,
    },

    /// Computes the multiplicative inverse, split in two if it contains zero
    Inverse {
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        a: Interval,
    },

    /// Compares two intervals, both exactly and approximately
    Compare {
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        a: Interval,
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        b: Interval,

        /// Tolerance for approximate comparison
        #[clap(short, long, default_value_t = 1e-9)]
        precision: f64,
    },

    /// Prints predicates and measurements of an interval
    Info {
        #[clap(value_parser = parse_interval, allow_hyphen_values = true)]
        a: Interval,
    },
}

/// Parses an interval written as `start,end`, `[start,end]`, or `(start,end)`
fn parse_interval(s: &str) -> Result<Interval> {
    let t = s.trim();
    let t = t
        .strip_prefix(['[', '('])
        .and_then(|t| t.strip_suffix([']', ')']))
        .unwrap_or(t);
    let (start, end) = t
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `start,end`, got `{s}`"))?;
    let start: f64 = start
        .trim()
        .parse()
        .with_context(|| format!("invalid start bound `{}`", start.trim()))?;
    let end: f64 = end
        .trim()
        .parse()
        .with_context(|| format!("invalid end bound `{}`", end.trim()))?;
    let out = Interval::new(start, end)?;
    debug!("parsed `{s}` as {out}");
    Ok(out)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    match args.cmd {
        Command::Add { a, b } => {
            info!("{a} + {b} = {}", a + b);
        }
        Command::Sub { a, b } => {
            info!("{a} - {b} = {}", a - b);
        }
        Command::Inverse { a } => match a.reciprocal() {
            Reciprocal::Single(i) => info!("1 / {a} = {i}"),
            Reciprocal::Split(lo, hi) => {
                debug!("{a} contains zero; splitting reciprocal");
                info!("1 / {a} = {lo} U {hi}");
            }
        },
        Command::Compare { a, b, precision } => {
            info!("{a} == {b}: {}", a == b);
            let close = a.approx_eq(&b, precision);
            info!("{a} ~= {b} (precision {precision}): {close}");
        }
        Command::Info { a } => {
            info!("interval:      {a}");
            info!("positive:      {}", a.positive());
            info!("negative:      {}", a.negative());
            info!("contains zero: {}", a.contains_zero());
            info!("width:         {}", a.width());
            info!("midpoint:      {}", a.midpoint());
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_interval() {
        let a = parse_interval("1,2").unwrap();
        assert_eq!(a, Interval::new(1.0, 2.0).unwrap());

        let a = parse_interval(" [-3, -1] ").unwrap();
        assert_eq!(a, Interval::new(-3.0, -1.0).unwrap());

        let a = parse_interval("(-inf,0)").unwrap();
        assert_eq!(a, Interval::new(f64::NEG_INFINITY, 0.0).unwrap());

        assert!(parse_interval("1").is_err());
        assert!(parse_interval("a,2").is_err());
        assert!(parse_interval("2,1").is_err());
        assert!(parse_interval("NaN,1").is_err());
    }

    #[test]
    fn test_args() {
        let args =
            Args::try_parse_from(["cli", "sub", "1,2", "-4,-3"]).unwrap();
        let Command::Sub { a, b } = args.cmd else {
            panic!("expected sub command");
        };
        assert_eq!(a - b, Interval::new(4.0, 6.0).unwrap());

        let args = Args::try_parse_from([
            "cli", "compare", "1,2", "1,2", "--precision", "0.5",
        ])
        .unwrap();
        let Command::Compare { precision, .. } = args.cmd else {
            panic!("expected compare command");
        };
        assert_eq!(precision, 0.5);
    }
}

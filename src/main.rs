//! ICL7665 - threshold divider resistor calculator
//!
//! Finds standard resistor values for the ICL7665 under/over-voltage
//! detector's three-resistor input divider.
//!
//! # Usage
//!
//! ```bash
//! icl7665 2.0 3.0 -s E12 -s E24
//! ```

use clap::{ArgAction, Parser};
use log::LevelFilter;

use circuit_calc::{
    divider::{match_thresholds, Thresholds},
    error::Result,
    matcher::{DecadePolicy, MatcherConfig, RatioMatcher, DEFAULT_LOWER_WEIGHT},
    series::{parse_series_name, Series, DEFAULT_DECADES},
    units::parse_value,
    DEFAULT_SERIES, DEFAULT_V_REF,
};

/// Calculate best matching resistor values for the ICL7665
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The two switching voltages of the ICL7665 (any order)
    #[arg(value_name = "VOLTAGE", num_args = 2, required = true, value_parser = parse_voltage)]
    voltages: Vec<f64>,

    /// Resistor series to match against (E3, E6, E12, E24, E48, E96, E192); may be repeated
    #[arg(short, long = "series", value_name = "SERIES", value_parser = parse_series)]
    series: Vec<usize>,

    /// Comparator reference voltage
    #[arg(long, default_value_t = DEFAULT_V_REF)]
    v_ref: f64,

    /// Weight of the lower threshold deviation when ranking candidates
    #[arg(long, default_value_t = DEFAULT_LOWER_WEIGHT)]
    weight: f64,

    /// Number of decades spanned by each series (starting at 1 ohm)
    #[arg(long, default_value_t = DEFAULT_DECADES)]
    decades: usize,

    /// Keep matches in the decade they were found instead of scaling them up
    #[arg(long)]
    keep_decades: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_voltage(text: &str) -> std::result::Result<f64, String> {
    parse_value(text).map_err(|e| e.to_string())
}

fn parse_series(text: &str) -> std::result::Result<usize, String> {
    parse_series_name(text).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let thresholds = Thresholds::new(args.voltages[0], args.voltages[1])?;
    let policy = if args.keep_decades {
        DecadePolicy::Keep
    } else {
        DecadePolicy::PreferHighest
    };
    let matcher = RatioMatcher::with_config(
        MatcherConfig::new()
            .with_lower_weight(args.weight)
            .with_decade_policy(policy),
    );

    let series_counts = if args.series.is_empty() {
        vec![DEFAULT_SERIES]
    } else {
        args.series
    };

    for count in series_counts {
        let series = Series::with_decades(count, args.decades)?;
        let solutions = match_thresholds(&series, &thresholds, args.v_ref, &matcher)?;

        println!("{}:", series.name());
        for solution in &solutions {
            let (low, high) = solution.thresholds.deviation_from(&thresholds);
            println!(
                "  {}  ({:+.2}% / {:+.2}%)",
                solution,
                high * 100.0,
                low * 100.0
            );
        }
    }

    Ok(())
}

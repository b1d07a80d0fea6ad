use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use bissextile::calendar;
use bissextile::is_leap_year;

/// Command-line demo for the predicate library
#[derive(Parser)]
#[command(name = "bissextile")]
#[command(about = "Leap-year verdicts from composable predicates", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a leap-year verdict for each year
    Check {
        /// Years to test
        #[arg(required = true, value_parser = calendar::parse_year, allow_negative_numbers = true)]
        years: Vec<i64>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Show how each divisibility rule voted for one year
    Explain {
        /// Year to break down
        #[arg(value_parser = calendar::parse_year, allow_negative_numbers = true)]
        year: i64,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
    /// List the leap years in an inclusive range
    List {
        /// First year of the range
        #[arg(long, value_parser = calendar::parse_year, allow_negative_numbers = true)]
        from: i64,

        /// Last year of the range
        #[arg(long, value_parser = calendar::parse_year, allow_negative_numbers = true)]
        to: i64,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One verdict line in JSON output
#[derive(Serialize)]
struct Verdict {
    year: i64,
    leap: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("bissextile started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Some(Commands::Check { years, format }) => run_check(&years, format),
        Some(Commands::Explain { year, format }) => run_explain(year, format),
        Some(Commands::List { from, to, format }) => run_list(from, to, format),
        None => {
            // Default to checking the current year
            let year = i64::from(Utc::now().year());
            run_check(&[year], Format::Text)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_check(years: &[i64], format: Format) -> anyhow::Result<()> {
    for &year in years {
        match format {
            Format::Text => println!("{}", verdict_line(year)),
            Format::Json => {
                let verdict = Verdict {
                    year,
                    leap: is_leap_year(year),
                };
                println!("{}", serde_json::to_string(&verdict)?);
            }
        }
    }
    Ok(())
}

fn run_explain(year: i64, format: Format) -> anyhow::Result<()> {
    let breakdown = calendar::explain(year);

    match format {
        Format::Json => println!("{}", serde_json::to_string(&breakdown)?),
        Format::Text => {
            println!("{year}:");
            println!("  divisible by 4:   {}", breakdown.divisible_by_4);
            println!("  divisible by 100: {}", breakdown.divisible_by_100);
            println!("  divisible by 400: {}", breakdown.divisible_by_400);
            println!(
                "  verdict:          {}",
                if breakdown.leap {
                    "leap year"
                } else {
                    "not a leap year"
                }
            );
        }
    }
    Ok(())
}

fn run_list(from: i64, to: i64, format: Format) -> anyhow::Result<()> {
    let years = calendar::leap_years_between(from, to)?;

    match format {
        Format::Json => println!("{}", serde_json::to_string(&years)?),
        Format::Text => {
            if years.is_empty() {
                println!("No leap years between {from} and {to}");
            } else {
                for year in &years {
                    println!("{year}");
                }
            }
        }
    }
    Ok(())
}

/// Pure: Format a one-line verdict for a year.
fn verdict_line(year: i64) -> String {
    if is_leap_year(year) {
        format!("{year} is a leap year")
    } else {
        format!("{year} is not a leap year")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_line_wording() {
        assert_eq!(verdict_line(2000), "2000 is a leap year");
        assert_eq!(verdict_line(1900), "1900 is not a leap year");
    }
}

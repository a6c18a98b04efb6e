//! almanac CLI entry point.

use almanac_cli::cli::{Cli, Commands};
use almanac_cli::config::Config;
use almanac_cli::output::{format_record, format_year, pretty};
use almanac_cli::{logging, session};
use almanac_core::weekday::weekday_label;
use almanac_core::CalendarDate;
use clap::Parser;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeekdayReport<'a> {
    date: CalendarDate,
    weekday: u8,
    weekday_name: &'a str,
    calendar_algorithm: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlgorithmsReport<'a> {
    current: &'a str,
    algorithms: Vec<&'a str>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::from_env().with_overrides(&cli);
    debug!(?config, "resolved configuration");
    config.apply()?;
    let calendar = session::snapshot();

    match cli.command {
        Commands::Year(args) => {
            let data = calendar.build_year_data(args.year);
            print!("{}", with_newline(format_year(&data, cli.format)?));
        }
        Commands::Weekday(args) => {
            let registry = calendar.registry();
            let weekday = registry.checked_weekday(args.year, args.month, args.day)?;
            let report = WeekdayReport {
                date: CalendarDate::new(args.year, args.month, args.day),
                weekday,
                weekday_name: weekday_label(weekday),
                calendar_algorithm: registry.current_algorithm(),
            };
            match format_record(&report, cli.format)? {
                Some(output) => print!("{}", with_newline(output)),
                None => println!(
                    "{}",
                    pretty::format_weekday(
                        report.date,
                        report.weekday,
                        report.weekday_name,
                        report.calendar_algorithm
                    )
                ),
            }
        }
        Commands::Algorithms => {
            let registry = calendar.registry();
            let report = AlgorithmsReport {
                current: registry.current_algorithm(),
                algorithms: registry.algorithms(),
            };
            match format_record(&report, cli.format)? {
                Some(output) => print!("{}", with_newline(output)),
                None => println!(
                    "{}",
                    pretty::format_algorithms(&report.algorithms, report.current)
                ),
            }
        }
        Commands::FromEra(args) => {
            let date = calendar.from_era(&args.era, args.era_year, args.month, args.day)?;
            match format_record(&date, cli.format)? {
                Some(output) => print!("{}", with_newline(output)),
                None => println!("{date}"),
            }
        }
    }

    Ok(())
}

fn with_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

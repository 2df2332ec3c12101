#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

use weather_summary::config::{Config, ReportKind};
use weather_summary::report::{daily_summary, summary};
use weather_summary::timed;
use weather_summary::weather::load;

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches, Command};
use env_logger::Env;

use std::path::Path;
use std::process;

fn main() {
    let env = Env::default().filter_or("WEATHER_LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let matches = Command::new("weather-summary")
        .version("0.1")
        .author("Chris Lieb")
        .about("Summarise daily minimum and maximum temperatures from a CSV file")
        .arg(
            Arg::new("input_file")
                .short('i')
                .long("input_file")
                .default_value("weather.csv"),
        )
        .arg(
            Arg::new("report")
                .short('r')
                .long("report")
                .default_value("all")
                .value_parser(["overview", "daily", "all"]),
        )
        .arg(Arg::new("config").short('c').long("config"))
        .get_matches();

    if let Err(err) = run(&matches) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            info!("Reading config from {path}");
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    let input_file = pick(matches, "input_file", config.input_file);
    let report: ReportKind = match config.report {
        Some(report) if !given_on_command_line(matches, "report") => report,
        _ => arg(matches, "report").parse()?,
    };

    let rows = timed!(
        "Reading weather data from {}",
        input_file,
        (|| load(Path::new(&input_file)))
    )?;

    if report.includes_overview() {
        let text = timed!("Rendering overview", (|| summary(&rows)))?;
        println!("{text}");
    }
    if report.includes_daily() {
        let text = timed!("Rendering daily summary", (|| daily_summary(&rows)))?;
        println!("{text}");
    }
    Ok(())
}

/// Command line values beat the config file, which beats the built-in default
fn pick(matches: &ArgMatches, id: &str, configured: Option<String>) -> String {
    match configured {
        Some(value) if !given_on_command_line(matches, id) => value,
        _ => arg(matches, id),
    }
}

fn given_on_command_line(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

fn arg(matches: &ArgMatches, id: &str) -> String {
    matches
        .get_one::<String>(id)
        .cloned()
        .unwrap_or_else(|| panic!("Argument {id} has a default value"))
}

#![deny(unsafe_code)]

//! Demonstration front end: scans a list of readings, accumulates a status
//! and reports it through a call-site annotated logger.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use callsite::traced;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use logging::{LogError, Logger, arg_fn, parts, stringify_optional};
use serde_json::{Value, json};
use status::Status;

const COMPONENT: &str = "statuslog";
const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    ExitCode::from(run_with(std::env::args_os(), &mut stdout, &mut stderr))
}

fn clap_command() -> Command {
    let command = Command::new(COMPONENT)
        .about("Scan readings against a threshold and report the accumulated status.")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; repeat for more detail.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("TAGS")
                .help("Enable comma-separated debug TAGS, or '*' for all.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_name("N")
                .help("Readings below N are reported.")
                .value_parser(value_parser!(i64))
                .default_value("10"),
        )
        .arg(
            Arg::new("fail")
                .long("fail")
                .help("Record an error so the payload is withheld.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the status as JSON instead of text.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("readings")
                .value_name("READING")
                .help("Integer readings to scan.")
                .value_parser(value_parser!(i64))
                .action(ArgAction::Append),
        );

    #[cfg(feature = "tracing")]
    let command = command.arg(
        Arg::new("tracing")
            .long("tracing")
            .help("Forward log lines to a tracing subscriber filtered by RUST_LOG.")
            .action(ArgAction::SetTrue),
    );

    command
}

fn run_with<I, T>(args: I, stdout: &mut impl Write, stderr: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let _ = error.print();
            return u8::try_from(error.exit_code()).unwrap_or(EXIT_USAGE);
        }
    };

    match execute(&matches, stdout) {
        Ok(status) if status.is_ok() => EXIT_SUCCESS,
        Ok(_) => EXIT_FAILURE,
        Err(error) => {
            let _ = writeln!(stderr, "{COMPONENT}: {error}");
            EXIT_USAGE
        }
    }
}

fn configured_logger(matches: &ArgMatches) -> Result<Logger, LogError> {
    let verbose = matches.get_count("verbose");
    let debug: Option<Vec<String>> = matches
        .get_many::<String>("debug")
        .map(|tags| tags.cloned().collect());

    let mut logger = Logger::new(COMPONENT);

    #[cfg(feature = "tracing")]
    if matches.get_flag("tracing") {
        logging::init_tracing();
        let _ = logger.set_sink(logging::TracingSink::new());
    }

    logger.set_from_args(&arg_fn(|name: &str| match name {
        "verbose" => Some(json!(verbose)),
        "debug" => debug.as_ref().map(|tags| json!(tags)),
        _ => None,
    }))?;
    Ok(logger)
}

fn execute(matches: &ArgMatches, stdout: &mut impl Write) -> Result<Status, LogError> {
    let mut logger = configured_logger(matches)?;
    let threshold = matches.get_one::<i64>("threshold").copied().unwrap_or(10);
    let readings: Vec<i64> = matches
        .get_many::<i64>("readings")
        .map(|values| values.copied().collect())
        .unwrap_or_default();

    logger.v1(parts!["scanning", readings.len(), "readings"])?;
    logger.if_debug(parts!["threshold", threshold], "scan")?;

    let mut status = traced!(scan(&mut logger, &readings, threshold))?;
    if matches.get_flag("fail") {
        status.add_error("failure requested");
    }

    status.dedup_info().dedup_warnings();
    status.log_to(&mut logger, Some("scan"))?;

    if matches.get_flag("json") {
        let text = serde_json::to_string(&status).map_err(io::Error::from)?;
        writeln!(stdout, "{text}")?;
    } else {
        writeln!(stdout, "{status}")?;
        match status.payload() {
            Ok(payload) => writeln!(stdout, "payload: {}", stringify_optional(payload))?,
            Err(error) => writeln!(stdout, "payload withheld: {error}")?,
        }
    }

    logger.end()?;
    Ok(status)
}

/// Reports readings below `threshold`, attributing entries to the caller.
fn scan(logger: &mut Logger, readings: &[i64], threshold: i64) -> Result<Status, LogError> {
    let mut status = Status::new();
    let mut passing = Vec::new();

    for &reading in readings {
        logger.if_debug(parts!["reading", reading], "scan")?;
        if reading < threshold {
            status.add_info_skipping("threshold not met", 1);
        } else {
            passing.push(reading);
        }
    }

    if readings.is_empty() {
        status.add_warning_skipping("no readings supplied", 1);
    }

    logger.v2(parts!["passing", Value::from(passing.clone())])?;
    status
        .set_field("threshold", threshold)
        .set_field("scanned", readings.len())
        .set_payload(passing);
    Ok(status)
}

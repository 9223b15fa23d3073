//! Command-line interface for the EDTF parser
//!
//! Usage:
//!   edtf parse `<expr>...`   - Parse expressions and print them in the chosen format
//!   edtf check `<path>`      - Check a file with one expression per line
//!   edtf formats           - List all available output formats
//!
//! Global options `--format`, `--level`, `--trace` and `--config` override
//! the values from the configuration file and the built-in defaults.

use clap::{Arg, ArgAction, ArgMatches, Command};
use edtf::config::{EdtfConfig, Loader};
use edtf::error::ProcessingError;
use edtf::formats::OutputFormat;
use edtf::processor::{Outcome, Processor};

fn main() {
    let matches = Command::new("edtf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and checking EDTF date/time expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format (json, yaml, treeviz, edtf)"),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .global(true)
                .value_parser(["full", "level0", "level1"])
                .help("Grammar alternatives to use"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print every grammar rule attempt to stderr"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse one or more expressions and print the result")
                .arg(
                    Arg::new("expressions")
                        .help("EDTF expressions to parse")
                        .required(true)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check that every non-blank line of a file is valid EDTF")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to check")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .try_get_matches()
        .unwrap_or_else(|e| e.exit());

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(true)
        }
        _ => Err(ProcessingError::MissingArgument("subcommand")),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, ProcessingError::InvalidFormat(_)) {
                print_formats_to_stderr();
            }
            std::process::exit(1);
        }
    }
}

/// Build the configuration from defaults, the optional config file and the
/// command-line overrides. Global args are visible on the subcommand matches.
fn load_config(matches: &ArgMatches) -> Result<EdtfConfig, ProcessingError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(level) = matches.get_one::<String>("level") {
        loader = loader.set_override("parser.level", level.as_str())?;
    }
    if matches.get_flag("trace") {
        loader = loader.set_override("parser.trace", true)?;
    }
    Ok(loader.build()?)
}

fn print_trace(outcome: &Outcome) {
    for event in &outcome.trace {
        eprintln!("[TRACE] {}", event);
    }
}

/// Handle the parse command. Returns false if any expression failed.
fn handle_parse_command(matches: &ArgMatches) -> Result<bool, ProcessingError> {
    let config = load_config(matches)?;
    let processor = Processor::from_config(&config)?;
    let expressions = matches
        .get_many::<String>("expressions")
        .ok_or(ProcessingError::MissingArgument("expressions"))?;

    let mut all_ok = true;
    for expression in expressions {
        let outcome = processor.process_expression(expression);
        print_trace(&outcome);
        match outcome.result {
            Ok(output) => println!("{}", output.trim_end()),
            Err(ProcessingError::Syntax { input, source, .. }) => {
                eprintln!("Error: {:?}: {}", input, source);
                all_ok = false;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(all_ok)
}

/// Handle the check command. Reports the first failing line.
fn handle_check_command(matches: &ArgMatches) -> Result<bool, ProcessingError> {
    let config = load_config(matches)?;
    // check prints no rendered output, so the configured format is not used
    let processor = Processor::new(config.parser.options(), OutputFormat::Edtf);
    let path = matches
        .get_one::<String>("path")
        .ok_or(ProcessingError::MissingArgument("path"))?;

    let outcomes = processor.check_file(path)?;
    let total = outcomes.len();
    for outcome in outcomes {
        print_trace(&outcome);
        if let Err(e) = outcome.into_result() {
            eprintln!("{}: {}", path, e);
            return Ok(false);
        }
    }
    println!("{}: {} expressions ok", path, total);
    Ok(true)
}

fn handle_formats_command() {
    println!("Available formats:");
    for format in OutputFormat::available() {
        println!("  {:<10} {}", format.name(), format.description());
    }
}

fn print_formats_to_stderr() {
    eprintln!("\nAvailable formats:");
    for format in OutputFormat::available() {
        eprintln!("  {}", format.name());
    }
}

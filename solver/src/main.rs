use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use points_core::io::read_expressions;
use points_core::solver::Problem;
use points_core::Symbol;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::time::{Duration, Instant};

#[macro_use]
extern crate serde_derive;

mod configuration;
mod format;
mod process;
mod runner;

use configuration::Configuration;
use format::{dump_report, dump_solutions, Format};
use process::ProcessSolver;

fn format_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("format")
        .long("format")
        .short("f")
        .takes_value(true)
        .possible_values(&Format::NAMES)
        .default_value("text")
        .help("How to print the solutions")
}

fn limit_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("limit")
        .long("limit")
        .short("l")
        .takes_value(true)
        .help("Maximal number of solutions, 0 for all")
}

fn create_app<'a, 'b>() -> App<'a, 'b> {
    App::new("points")
        .version("0.1.0")
        .about("Renders solutions of the 24 points game as LaTeX")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .takes_value(true)
                .global(true)
                .help("YAML configuration file"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .global(true)
                .help("Prints timings and parse diagnostics to stderr"),
        )
        .subcommand(
            SubCommand::with_name("render")
                .about("Renders infix expressions, one per argument or per line of stdin")
                .arg(Arg::with_name("EXPR").multiple(true))
                .arg(format_arg()),
        )
        .subcommand(
            SubCommand::with_name("extract")
                .about("Extracts solutions from the printed output of a solver")
                .arg(Arg::with_name("FILE").help("Solver output, stdin if omitted"))
                .arg(
                    Arg::with_name("target")
                        .long("target")
                        .short("t")
                        .takes_value(true)
                        .help("Value the solutions evaluate to"),
                )
                .arg(
                    Arg::with_name("raw")
                        .long("raw")
                        .help("Keeps prompts and duplicates, only the marker is removed"),
                )
                .arg(limit_arg())
                .arg(format_arg()),
        )
        .subcommand(
            SubCommand::with_name("solve")
                .about("Runs the solver on the numbers and renders its solutions")
                .arg(Arg::with_name("NUMBERS").multiple(true).required(true))
                .arg(limit_arg())
                .arg(format_arg()),
        )
}

struct Options {
    configuration: Configuration,
    verbose: bool,
}

impl Options {
    /// Global flags may be given in front of or after the subcommand.
    fn load(matches: &ArgMatches, sub: &ArgMatches) -> Result<Options, String> {
        let configuration = match sub.value_of("config").or_else(|| matches.value_of("config")) {
            Some(filename) => Configuration::load(filename)?,
            None => Configuration::default(),
        };
        Ok(Options {
            configuration,
            verbose: matches.is_present("verbose") || sub.is_present("verbose"),
        })
    }
}

fn parse_value<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
{
    match matches.value_of(name) {
        None => Ok(None),
        Some(code) => code
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid value for --{}: {}", name, code)),
    }
}

fn get_format(matches: &ArgMatches) -> Result<Format, String> {
    Ok(parse_value(matches, "format")?.unwrap_or_default())
}

fn read_input(filename: Option<&str>) -> Result<String, String> {
    let mut text = String::new();
    match filename {
        Some(filename) => File::open(filename)
            .and_then(|mut file| file.read_to_string(&mut text))
            .map_err(|msg| format!("Reading {}: {}", filename, msg))?,
        None => io::stdin()
            .read_to_string(&mut text)
            .map_err(|msg| format!("Reading stdin: {}", msg))?,
    };
    Ok(text)
}

fn render(options: &Options, matches: &ArgMatches) -> Result<String, String> {
    let expressions: Vec<String> = match matches.values_of("EXPR") {
        Some(values) => values.map(String::from).collect(),
        None => read_expressions(BufReader::new(io::stdin()))
            .map_err(|msg| format!("Reading stdin: {}", msg))?,
    };
    if options.verbose {
        for expression in expressions.iter() {
            match Symbol::parse(expression) {
                Ok(symbol) => eprintln!("{}: depth {}", symbol, symbol.depth()),
                Err(error) => eprintln!("Could not parse \"{}\": {}", expression, error),
            }
        }
    }
    let begin = Instant::now();
    let solutions = runner::render_all(&expressions);
    if options.verbose {
        eprintln!(
            "Rendered {} expressions in {} ms",
            solutions.len(),
            begin.elapsed().as_millis()
        );
    }
    dump_solutions(&solutions, get_format(matches)?)
}

fn extract(options: &Options, matches: &ArgMatches) -> Result<String, String> {
    let target = parse_value(matches, "target")?.unwrap_or(options.configuration.target);
    let limit = parse_value(matches, "limit")?;
    let output = read_input(matches.value_of("FILE"))?;
    let solutions = if matches.is_present("raw") {
        runner::extract_raw(&output, target, limit)
    } else {
        runner::extract(&output, target, limit)
    };
    if options.verbose {
        eprintln!("Extracted {} solutions for {}", solutions.len(), target);
    }
    dump_solutions(&solutions, get_format(matches)?)
}

fn solve(options: &Options, matches: &ArgMatches) -> Result<String, String> {
    let configuration = &options.configuration;
    let numbers = matches
        .values_of("NUMBERS")
        .map(|values| values.collect::<Vec<&str>>().join(" "))
        .unwrap_or_default();
    let limit = parse_value(matches, "limit")?;
    let problem =
        Problem::parse(&numbers, limit, &configuration.limits).map_err(|error| error.to_string())?;
    if options.verbose {
        eprintln!(
            "Running {} on {}",
            configuration.executable.display(),
            problem.input_line()
        );
    }
    let solver = ProcessSolver::new(
        configuration.executable.clone(),
        Duration::from_millis(configuration.timeout_ms),
    );
    let report =
        runner::run(&solver, &problem, configuration.target).map_err(|error| error.to_string())?;
    if let Some(stderr) = report.stderr.as_ref() {
        eprint!("{}", stderr);
    }
    dump_report(&report, get_format(matches)?)
}

fn run(matches: &ArgMatches) -> Result<String, String> {
    match matches.subcommand() {
        ("render", Some(sub)) => render(&Options::load(matches, sub)?, sub),
        ("extract", Some(sub)) => extract(&Options::load(matches, sub)?, sub),
        ("solve", Some(sub)) => solve(&Options::load(matches, sub)?, sub),
        (name, _) => Err(format!("Unknown command {}", name)),
    }
}

fn main() {
    let matches = create_app().get_matches();
    match run(&matches) {
        Ok(text) => {
            if let Err(msg) = io::stdout().write_all(text.as_bytes()) {
                eprintln!("Writing output: {}", msg);
                std::process::exit(1);
            }
        }
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    }
}

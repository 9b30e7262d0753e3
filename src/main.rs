mod debug_report;

use doctor::{Options, Responder, RuleSet, bundled_rules};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const GREETING: &str = "HELLO, WHAT IS YOUR PROBLEM?";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let rules = match &config.rules {
        Some(path) => match RuleSet::load(path) {
            Ok(rules) => rules,
            Err(err) => {
                eprintln!("error: {}: {err}", path.display());
                std::process::exit(1);
            }
        },
        None => bundled_rules().clone(),
    };

    let options = Options { drop_unfilled_wildcard: config.drop_unfilled_wildcard, ..Options::default() };
    let mut doctor = Responder::with_options(rules, options);

    let result = match &config.input {
        Some(text) => {
            answer(&mut doctor, text, &config);
            Ok(())
        }
        None => converse(&mut doctor, &config),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    input: Option<String>,
    rules: Option<PathBuf>,
    verbose: bool,
    color: bool,
    drop_unfilled_wildcard: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn answer(doctor: &mut Responder, line: &str, config: &CliConfig) {
    if config.verbose {
        let res = doctor.respond_verbose(line);
        debug_report::print_reply(&res, config.color);
    } else {
        println!("{}", doctor.respond(line));
    }
}

/// Read lines from stdin until EOF, answering each non-empty one.
fn converse(doctor: &mut Responder, config: &CliConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock();

    println!("{GREETING}");
    loop {
        if interactive {
            print!("> ");
            stdout.flush()?;
        }

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }

        // Piped input is not echoed by the terminal; keep the transcript readable.
        if !interactive {
            println!(">{line}");
        }
        answer(doctor, line, config);
    }
    Ok(())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut rules: Option<PathBuf> = None;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut drop_unfilled_wildcard = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("doctor {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--drop-unfilled-wildcard" => drop_unfilled_wildcard = true,
            "--rules" | "-r" => {
                let value = args.next().ok_or_else(|| "error: --rules expects a path".to_string())?;
                rules = Some(PathBuf::from(value));
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--rules=") => {
                rules = Some(PathBuf::from(arg.trim_start_matches("--rules=")));
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    if input.as_deref().is_some_and(|text| text.trim().is_empty()) {
        return Err(format!("error: empty input\n\n{}", help_text()));
    }

    Ok(CliConfig { input, rules, verbose, color, drop_unfilled_wildcard })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "doctor {version}

Rule-based conversational responder.

Usage:
  doctor [OPTIONS]                    Converse line by line on stdin.
  doctor [OPTIONS] [--] <input...>    Answer a single line and exit.
  doctor [OPTIONS] --input <text>

Options:
  -i, --input <text>           Answer this line instead of reading stdin.
  -r, --rules <path>           Rule file to load. Default: the bundled rule set.
  -v, --verbose                Print how each reply was built.
  --drop-unfilled-wildcard     Remove a template's '*' when there is nothing
                               to splice into it.
  --color                      Force ANSI color output.
  --no-color                   Disable ANSI color output.
  -h, --help                   Show this help message.
  -V, --version                Print version information.

Environment:
  RUST_LOG                     Log filter, e.g. doctor=debug. Default: warn.

Exit codes:
  0  Success.
  1  Rule file could not be loaded, or I/O failed.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

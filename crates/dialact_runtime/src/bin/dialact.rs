//! Dialact CLI entry point.

use dialact_runtime::{Repl, Session, serialize};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    dump_bindings: bool,
    save_bindings: Option<PathBuf>,
    load_bindings: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--dump-bindings" => config.dump_bindings = true,
            "--save-bindings" => {
                i += 1;
                if i >= args.len() {
                    return Err("--save-bindings requires a path".into());
                }
                config.save_bindings = Some(PathBuf::from(&args[i]));
            }
            "--load-bindings" => {
                i += 1;
                if i >= args.len() {
                    return Err("--load-bindings requires a path".into());
                }
                config.load_bindings = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("dialact {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Seed the session from a saved binding table if requested
    let session = match &config.load_bindings {
        Some(path) => Session::with_bindings(serialize::load_from_file(path)?),
        None => Session::new(),
    };

    // Create REPL
    let mut repl = Repl::new()?.with_session(session);

    // Run any specified script files
    for file in &config.files {
        repl.run_file(file)?;
    }

    // Dump bindings if requested
    if config.dump_bindings {
        dump_bindings(repl.session());
    }

    // If batch mode, persist and exit now
    if config.batch_mode {
        save_bindings(&config, repl)?;
        return Ok(());
    }

    // Run interactive REPL
    // If files were loaded, suppress banner since context is established
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    save_bindings(&config, repl)?;
    Ok(())
}

fn save_bindings(config: &CliConfig, repl: Repl) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &config.save_bindings {
        let bindings = repl.session().bindings().count();
        serialize::save_to_file(&repl.into_session().into_bindings(), path)?;
        eprintln!("saved {bindings} bindings to {}", path.display());
    }
    Ok(())
}

fn dump_bindings(session: &Session) {
    println!("\x1b[1;36m=== Bindings ===\x1b[0m");

    let mut bindings: Vec<_> = session.bindings().collect();
    bindings.sort_by_key(|(name, _)| name.to_string());
    for (name, value) in bindings {
        println!("  {name} = {value}");
    }

    println!();
}

fn print_help() {
    println!(
        "\x1b[1mDialact\x1b[0m - Dialog action script parser

\x1b[1mUSAGE:\x1b[0m
    dialact [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Script files to run before starting REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    -b, --batch             Run files and exit (no REPL)
    --dump-bindings         Print the binding table after running files
    --save-bindings PATH    Save the binding table on exit
    --load-bindings PATH    Seed the session from a saved binding table

\x1b[1mEXAMPLES:\x1b[0m
    dialact                          Start interactive REPL
    dialact intro.da                 Run intro.da, then start REPL
    dialact -b scene.da              Run scene.da and exit
    dialact -b --dump-bindings s.da  Show variables bound by s.da

\x1b[1mREPL COMMANDS:\x1b[0m
    let name = value     Bind a variable in the session
    :bindings            Show all bound variables
    :quit                Exit REPL
    Ctrl+D               Exit REPL"
    );
}

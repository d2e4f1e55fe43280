use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use quill::{Config, Context, PrintHandler, config::DEFAULT_MAX_CALL_DEPTH, parse_and_execute};

/// quill runs Quill programs, either interactively or from a script.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the lines of this script instead of reading from the terminal.
    script: Option<PathBuf>,

    /// Deepest allowed nesting of function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Stop any `while` loop after this many iterations.
    #[arg(long)]
    max_loop_iterations: Option<u64>,

    /// Do not print the banner and prompt.
    #[arg(short, long)]
    quiet: bool,
}

/// Installs a tracing subscriber when `RUST_LOG` is set.
///
/// Logs go to stderr so they never mix with program output.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// The line that ends a session, in any letter case.
fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit")
}

fn run_script(context: &mut Context, path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
                                             eprintln!("Failed to read the script '{}': {e}",
                                                       path.display());
                                             std::process::exit(1);
                                         });

    for line in source.lines() {
        if is_exit(line) {
            break;
        }
        parse_and_execute(context, line);
    }
}

fn run_repl(context: &mut Context, quiet: bool) {
    if !quiet {
        println!("Enter code (type 'exit' to stop):");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        if !quiet {
            print!(">>> ");
            // A failed flush only loses the prompt.
            let _ = io::stdout().flush();
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if is_exit(source) {
            break;
        }
        parse_and_execute(context, source);
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let config = Config { max_call_depth:      args.max_call_depth,
                          max_loop_iterations: args.max_loop_iterations, };
    let mut context = Context::with_config(config, PrintHandler::Stdout);

    match &args.script {
        Some(path) => run_script(&mut context, path),
        None => run_repl(&mut context, args.quiet),
    }
}

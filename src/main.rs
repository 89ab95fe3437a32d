use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use ksm::{error::Error, interpreter::evaluator::core::Context, run_line};
use tracing::Level;

/// ksm is an interpreter for the KSM scripting language. Without arguments it
/// starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs a script file line by line instead of starting the interactive
    /// session.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Logs interpreter diagnostics to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut context = Context::new();

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             path.display());
                                                   std::process::exit(1);
                                               });
        for line in script.lines() {
            report(run_line(&mut context, line));
        }
    } else {
        repl(&mut context);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();
}

fn repl(context: &mut Context) {
    println!("Welcome to the KSM REPL!");
    println!("Type 'exit' to quit.");

    let mut lines = io::stdin().lock().lines();
    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let Some(Ok(line)) = lines.next() else {
            return;
        };
        if line == "exit" {
            return;
        }

        report(run_line(context, &line));
    }
}

fn report(result: Result<(), Error>) {
    match result {
        Ok(()) => {},
        Err(Error::Parse(e)) => println!("Parsing error: {e}"),
        Err(Error::Runtime(e)) => println!("Interpretation error: {e}"),
    }
}

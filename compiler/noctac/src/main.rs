//! Nocta CLI.
//!
//! Zero arguments: interactive line-by-line scanning. One argument: scan
//! that file and exit nonzero if any lexical error was reported. More:
//! usage.

use noctac::{init_tracing, run_file, run_prompt};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => {
            if let Err(e) = run_prompt() {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        2 => match run_file(&args[1]) {
            Ok(had_errors) => {
                if had_errors {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("error: {}: {e}", args[1]);
                std::process::exit(1);
            }
        },
        _ => {
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(argv0: &str) {
    eprintln!("usage: {argv0} [source-file]");
}

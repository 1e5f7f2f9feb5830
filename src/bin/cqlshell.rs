//! # cqlshell CLI Entry Point
//!
//! ## Usage
//!
//! ```bash
//! # Interactive shell
//! cqlshell
//!
//! # Run statements given on the command line
//! cqlshell -e "SELECT * FROM t1; SELECT * FROM t2;"
//!
//! # Run a CQL file, or standard input with '-'
//! cqlshell -f statements.cql
//! cat statements.cql | cqlshell -f -
//! ```

use cqlshell::cli::{batch, Repl, SessionState};
use eyre::{bail, Result, WrapErr};
use std::env;
use std::io::Read;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut execute: Option<String> = None;
    let mut file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("cqlshell {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "--execute" | "-e" => {
                i += 1;
                match args.get(i) {
                    Some(text) => execute = Some(text.clone()),
                    None => bail!("option {} requires an argument", args[i - 1]),
                }
            }
            "--file" | "-f" => {
                i += 1;
                match args.get(i) {
                    Some(path) => file = Some(path.clone()),
                    None => bail!("option {} requires an argument", args[i - 1]),
                }
            }
            arg => bail!("Unknown option: {arg}"),
        }
        i += 1;
    }

    if execute.is_some() && file.is_some() {
        bail!("options -e and -f cannot be combined");
    }

    let mut session = SessionState::new();

    if let Some(text) = execute {
        batch::run_script(&text, &mut session)?;
        return Ok(());
    }

    if let Some(path) = file {
        let content = if path == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .wrap_err("failed to read standard input")?;
            buffer
        } else {
            std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read {path}"))?
        };
        batch::run_script(&content, &mut session)?;
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    repl.run()
}

fn print_usage() {
    println!("cqlshell - CQL statement recognizer shell");
    println!();
    println!("USAGE:");
    println!("    cqlshell [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -e, --execute <TEXT>   Run the given CQL statements and exit");
    println!("    -f, --file <PATH>      Run a CQL file ('-' reads standard input)");
    println!("    -h, --help             Print help information");
    println!("    -v, --version          Print version information");
    println!();
    println!("With no options, cqlshell starts an interactive shell.");
}

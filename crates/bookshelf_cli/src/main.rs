//! `bookshelf` executable.
//!
//! # Responsibility
//! - Parse arguments, start optional file logging and open the catalog.
//! - Hand the opened store to the interactive shell.
//! - Map a catalog that cannot be opened to exit code 1.

mod cli;
mod shell;

use bookshelf_core::{core_version, init_logging, BookStore};
use clap::Parser;
use cli::{AppConfig, Args};
use log::{error, info};
use shell::Shell;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const EXIT_OK: u8 = 0;
const EXIT_FATAL: u8 = 1;

fn main() -> ExitCode {
    let config = AppConfig::from(Args::parse());

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("[WARN] file logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    ExitCode::from(run(&config, stdin.lock(), stdout.lock()))
}

/// Opens the catalog and drives the shell until exit; returns the exit code.
fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, mut output: W) -> u8 {
    let mut store = match BookStore::open(&config.data_file) {
        Ok(store) => store,
        Err(err) => {
            error!("event=app_exit module=cli status=error code={EXIT_FATAL} error={err}");
            // Nothing useful remains to do if this write fails too.
            let _ = writeln!(
                output,
                "[ERROR] cannot open catalog `{}`: {err}. Fix the data or use another file.",
                config.data_file.display()
            );
            return EXIT_FATAL;
        }
    };

    let result = writeln!(
        output,
        "bookshelf {} - catalog file: {}",
        core_version(),
        store.path().display()
    )
    .and_then(|()| Shell::new(&mut store, input, &mut output).run());

    match result {
        Ok(()) => {
            info!("event=app_exit module=cli status=ok code={EXIT_OK}");
            EXIT_OK
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error code={EXIT_FATAL} error={err}");
            eprintln!("[ERROR] terminal I/O failed: {err}");
            EXIT_FATAL
        }
    }
}

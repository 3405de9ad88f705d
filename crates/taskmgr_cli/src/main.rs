//! Interactive task tracker entry point.
//!
//! # Responsibility
//! - Parse flags, start optional file logging, gate on login.
//! - Load the task file once and hand the session to the menu loop.
//!
//! # Invariants
//! - A task file that fails to load is never overwritten by this process.

mod args;
mod auth;
mod menu;
mod prompt;

use args::Args;
use auth::{login_until_accepted, Credentials};
use clap::Parser;
use log::error;
use std::io::{self, Write};
use std::process::ExitCode;
use taskmgr_core::{init_logging, JsonFileRepository, TaskService};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = &args.log_dir {
        if let Err(err) = init_logging(&args.log_level, log_dir) {
            eprintln!("taskmgr: logging disabled: {err}");
        }
    }

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("event=terminal_io module=cli status=error error={err}");
            eprintln!("taskmgr: terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<ExitCode> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    if !login_until_accepted(&mut input, &mut output, &Credentials::placeholder())? {
        return Ok(ExitCode::SUCCESS);
    }

    let mut service = match TaskService::open(JsonFileRepository::new(&args.file)) {
        Ok(service) => service,
        Err(err) => {
            output.flush()?;
            eprintln!("taskmgr: could not load tasks: {err}");
            eprintln!(
                "taskmgr: fix or move `{}` and start again; it was left unchanged.",
                args.file.display()
            );
            return Ok(ExitCode::FAILURE);
        }
    };
    writeln!(output, "Tasks loaded from file.")?;

    menu::run_menu(&mut input, &mut output, &mut service)?;
    Ok(ExitCode::SUCCESS)
}

use crate::repl::Repl;
use crate::shell::Shell;
use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;
use tsh_types::Context;

mod errors;
mod repl;
mod shell;

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let ctx = Context::default();
    let mut shell = Shell::new(&ctx);
    let mut repl = Repl::new(&mut shell, ctx);

    debug!("start shell");
    if let Err(err) = repl.run() {
        errors::display_user_error(&err);
    }

    // Best-effort farewell; printed whether the loop ended via the exit
    // command, end of input, or a fatal persistence error. The process
    // always leaves cleanly.
    println!("Shutting down...");
    ExitCode::SUCCESS
}

fn init_tracing() -> Result<()> {
    let log_file = std::sync::Arc::new(std::fs::File::create(format!(
        "./{}.log",
        shell::APP_NAME
    ))?);
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(log_file)
        .init();
    Ok(())
}

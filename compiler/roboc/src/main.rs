//! RoboScript command-line driver.

use std::io::IsTerminal;

use clap::Parser;
use robo_diagnostic::emitter::TerminalEmitter;
use roboc::cli::{Cli, Command};
use roboc::commands::{build_file, check_files, run_file, RunOptions};
use roboc::tracing_setup::init_tracing;
use roboc::CliError;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(cli.color.into(), is_tty);

    if let Err(err) = dispatch(cli.command, &mut emitter) {
        if !err.is_reported() {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}

fn dispatch(
    command: Command,
    emitter: &mut TerminalEmitter<std::io::Stderr>,
) -> Result<(), CliError> {
    match command {
        Command::Check { files } => {
            let summary = check_files(&files, emitter)?;
            println!(
                "OK: {} file(s), {} warning(s)",
                summary.files, summary.warnings
            );
        }
        Command::Run {
            file,
            scene,
            max_iterations,
            max_seconds,
        } => {
            let options = RunOptions {
                max_iterations,
                max_duration: max_seconds,
                scene_out: scene,
            };
            let summary = run_file(&file, &options, emitter)?;
            match &options.scene_out {
                Some(out) => println!("OK: {} -> {}", file.display(), out.display()),
                None => println!("OK: {} ({summary})", file.display()),
            }
        }
        Command::Build { file, output } => {
            let sketch = build_file(&file, output.as_deref(), emitter)?;
            match output {
                Some(out) => println!("OK: {} -> {}", file.display(), out.display()),
                None => print!("{sketch}"),
            }
        }
    }
    Ok(())
}

//! Keypad CLI: a four-function calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad run 3 add 4 multiply 2 calc   # prints 11
//! keypad run --format json 8 / 0 =     # full view transcript
//! keypad repl                          # one line of keys at a time
//! keypad keys                          # list the keypad buttons
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use keypad_cli::{
    list_keys, logging, run_repl, run_tokens, Cli, CliConfig, CliResult, ColorChoice, Commands,
    OutputFormat, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    console::set_colors_enabled(config.color.should_color());
    logging::init_logging(config.verbosity, config.color.should_color());
    debug!(?config, "configuration built");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run(args) => {
            let config = config.with_format(OutputFormat::from(args.format));
            run_tokens(&config, &args.tokens, &mut out)?;
        }
        Commands::Repl(args) => {
            let stdin = io::stdin();
            run_repl(&config, stdin.lock(), &mut out, !args.no_prompt)?;
        }
        Commands::Keys(args) => {
            let config = config.with_format(OutputFormat::from(args.format));
            list_keys(&config, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(ColorChoice::from(cli.color.clone()))
}

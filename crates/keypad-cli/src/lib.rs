//! Keypad CLI Library
//!
//! Terminal host for the keypad calculator: presses key tokens given on the
//! command line or stdin and prints what the calculator shows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{Cli, ColorArg, Commands, FormatArg, KeysArgs, ReplArgs, RunArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_keys_json, render_keys_text, SessionReport, TerminalView};
pub use runner::{collect_tokens, list_keys, run_repl, run_tokens};

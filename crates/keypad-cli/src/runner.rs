//! Command runners
//!
//! Each runner takes its writer explicitly so the same code serves the
//! binary (stdout) and the unit tests (a byte buffer).

use std::io::{BufRead, Write};

use keypad_calc::core::{Calculator, InputToken};
use keypad_calc::keypad::Keypad;
use keypad_calc::view::RecordingView;
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{render_keys_json, render_keys_text, SessionReport, TerminalView};

/// Words that end a REPL session
const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Splits command-line arguments into key tokens.
///
/// An argument may hold several whitespace-separated tokens (`"3 add 4"`).
pub fn collect_tokens(args: &[String]) -> CliResult<Vec<String>> {
    let tokens: Vec<String> = args
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(str::to_string)
        .collect();
    if tokens.is_empty() {
        return Err(CliError::invalid_argument("no key tokens given"));
    }
    Ok(tokens)
}

/// Presses every token and writes the outcome in the configured format
pub fn run_tokens<W: Write>(config: &CliConfig, args: &[String], out: &mut W) -> CliResult<()> {
    let tokens = collect_tokens(args)?;
    info!(count = tokens.len(), "running key sequence");

    match config.format {
        OutputFormat::Text => {
            let use_color = config.color.should_color();
            let view = TerminalView::new(&mut *out, use_color, config.verbosity.is_quiet());
            let mut calculator = Calculator::new(view);
            for token in &tokens {
                calculator.press(InputToken::parse(token));
            }
            calculator.view_mut().write_display()?;
        }
        OutputFormat::Json => {
            let mut calculator = Calculator::new(RecordingView::new());
            for token in &tokens {
                calculator.press(InputToken::parse(token));
            }
            let report = SessionReport::new(&tokens, calculator.view());
            writeln!(out, "{}", report.to_json()?)?;
        }
    }
    Ok(())
}

/// Reads tokens line by line and writes the display after each line.
///
/// The session ends at end of input or on a line reading `quit` or `exit`.
/// Returns the number of lines processed.
pub fn run_repl<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    out: &mut W,
    prompt: bool,
) -> CliResult<usize> {
    let use_color = config.color.should_color();
    let view = TerminalView::new(&mut *out, use_color, config.verbosity.is_quiet());
    let mut calculator = Calculator::new(view);
    let mut processed = 0;

    if prompt {
        calculator.view_mut().write_prompt()?;
    }
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if QUIT_WORDS.contains(&line) {
            debug!("repl quit requested");
            break;
        }
        if !line.is_empty() {
            for token in line.split_whitespace() {
                calculator.press(InputToken::parse(token));
            }
            calculator.view_mut().write_display()?;
            processed += 1;
        }
        if prompt {
            calculator.view_mut().write_prompt()?;
        }
    }

    info!(lines = processed, "repl session finished");
    Ok(processed)
}

/// Writes the keypad table
pub fn list_keys<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    let keypad = Keypad::standard();
    match config.format {
        OutputFormat::Text => write!(
            out,
            "{}",
            render_keys_text(&keypad, config.color.should_color())
        )?,
        OutputFormat::Json => writeln!(out, "{}", render_keys_json(&keypad)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    fn run(config: &CliConfig, tokens: &[&str]) -> String {
        let mut out = Vec::new();
        run_tokens(config, &args(tokens), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Writer for an output that has gone away
    #[derive(Debug)]
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdout closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn repl(config: &CliConfig, input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let lines = run_repl(config, input.as_bytes(), &mut out, false).unwrap();
        (lines, String::from_utf8(out).unwrap())
    }

    mod collect_tests {
        use super::*;

        #[test]
        fn test_splits_combined_arguments() {
            let tokens = collect_tokens(&args(&["3 add", "4", " calc "])).unwrap();
            assert_eq!(tokens, vec!["3", "add", "4", "calc"]);
        }

        #[test]
        fn test_blank_arguments_rejected() {
            let err = collect_tokens(&args(&["", "  "])).unwrap_err();
            assert!(matches!(err, CliError::InvalidArgument { .. }));
        }
    }

    mod run_tests {
        use super::*;

        #[test]
        fn test_precedence() {
            assert_eq!(run(&plain(), &["3", "add", "4", "multiply", "2", "calc"]), "11\n");
        }

        #[test]
        fn test_symbol_aliases() {
            assert_eq!(run(&plain(), &["9", "-", "4", "="]), "5\n");
        }

        #[test]
        fn test_digits_only() {
            assert_eq!(run(&plain(), &["1", "2", ".", "5"]), "12.5\n");
        }

        #[test]
        fn test_divide_by_zero() {
            assert_eq!(run(&plain(), &["8", "divide", "0", "calc"]), "Infinity\n");
        }

        #[test]
        fn test_unsupported_prints_notice_then_display() {
            assert_eq!(
                run(&plain(), &["5", "percent"]),
                "NOTICE Sorry, the \"percent\" operation is not yet supported\n5\n"
            );
        }

        #[test]
        fn test_quiet_hides_notice() {
            let config = plain().with_verbosity(Verbosity::Quiet);
            assert_eq!(run(&config, &["5", "sign"]), "5\n");
        }

        #[test]
        fn test_json_report() {
            let config = plain().with_format(OutputFormat::Json);
            let out = run(&config, &["2", "add", "2", "calc"]);
            let json: serde_json::Value = serde_json::from_str(&out).unwrap();
            assert_eq!(json["display"], "4");
            assert_eq!(json["tokens"].as_array().map(Vec::len), Some(4));
        }

        #[test]
        fn test_closed_output_is_io_error() {
            let err = run_tokens(&plain(), &args(&["5", "percent"]), &mut ClosedPipe).unwrap_err();
            assert!(matches!(err, CliError::Io(_)));
        }

        #[test]
        fn test_no_tokens_is_error() {
            let mut out = Vec::new();
            assert!(run_tokens(&plain(), &[], &mut out).is_err());
            assert!(out.is_empty());
        }
    }

    mod repl_tests {
        use super::*;

        #[test]
        fn test_display_after_each_line() {
            let (lines, out) = repl(&plain(), "1 2\nadd 3\ncalc\n");
            assert_eq!(lines, 3);
            assert_eq!(out, "12\n3\n15\n");
        }

        #[test]
        fn test_state_persists_across_lines() {
            let (_, out) = repl(&plain(), "3 add 4\nmultiply 2\ncalc\n");
            assert_eq!(out.lines().last(), Some("11"));
        }

        #[test]
        fn test_quit_stops_reading() {
            let (lines, out) = repl(&plain(), "7\nquit\n8\n");
            assert_eq!(lines, 1);
            assert_eq!(out, "7\n");
        }

        #[test]
        fn test_blank_lines_skipped() {
            let (lines, out) = repl(&plain(), "\n   \n4\n");
            assert_eq!(lines, 1);
            assert_eq!(out, "4\n");
        }

        #[test]
        fn test_clear_line() {
            let (_, out) = repl(&plain(), "9 add 1\nclear\n");
            assert_eq!(out, "1\n0\n");
        }

        #[test]
        fn test_closed_output_is_io_error() {
            let err = run_repl(&plain(), "5 sign\n".as_bytes(), &mut ClosedPipe, false).unwrap_err();
            assert!(matches!(err, CliError::Io(_)));
        }

        #[test]
        fn test_prompt_written() {
            let mut out = Vec::new();
            run_repl(&plain(), "5\n".as_bytes(), &mut out, true).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), "> 5\n> ");
        }
    }

    mod keys_tests {
        use super::*;

        #[test]
        fn test_keys_text() {
            let mut out = Vec::new();
            list_keys(&plain(), &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            assert!(text.contains("btn-calc"));
            assert!(text.contains("btn-7"));
        }

        #[test]
        fn test_keys_json() {
            let mut out = Vec::new();
            list_keys(&plain().with_format(OutputFormat::Json), &mut out).unwrap();
            let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
            assert_eq!(json.as_array().map(Vec::len), Some(19));
        }
    }
}

//! # Postage CLI
//!
//! Reads mail pieces as `length,height,thickness,start_zip,end_zip` lines
//! and prints the postage for each, or `UNMAILABLE`.

pub mod config;
pub mod format;
pub mod input;
pub mod logging;

use anyhow::{Context, Result};
use postage_rates::PostageEngine;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use config::CliConfig;

/// Prompt shown before each line
pub const PROMPT: &str =
    "Enter length, height, thickness, start zip, end zip (comma-separated): ";

/// Counts for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub priced: usize,
    pub unmailable: usize,
    pub failed: usize,
}

impl SessionSummary {
    pub fn total(&self) -> usize {
        self.priced + self.unmailable + self.failed
    }
}

/// Read, rate and print pieces until the configured count or end of input
///
/// A line that fails to parse or rate prints `ERROR: ...` and the session
/// continues with the next line.
pub fn run<R, W, P>(
    engine: &PostageEngine,
    config: &CliConfig,
    mut reader: R,
    mut writer: W,
    mut prompter: P,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    let mut summary = SessionSummary::default();
    let mut line = String::new();

    while config.iterations == 0 || summary.total() < config.iterations {
        if config.prompt {
            write!(prompter, "{}", PROMPT).context("Failed to write prompt")?;
            prompter.flush().context("Failed to flush prompt")?;
        }

        line.clear();
        if reader.read_line(&mut line).context("Failed to read input")? == 0 {
            debug!("End of input");
            break;
        }

        let rated = input::parse_line(&line).and_then(|request| engine.quote(&request));
        match rated {
            Ok(quote) => {
                if quote.postage.is_unmailable() {
                    summary.unmailable += 1;
                } else {
                    summary.priced += 1;
                }
                writeln!(writer, "{}", format::format_quote(&quote, config)?)
                    .context("Failed to write result")?;
            }
            Err(e) => {
                summary.failed += 1;
                debug!(error = %e, input = line.trim(), "Rejected mail piece");
                writeln!(writer, "ERROR: {}", e).context("Failed to write result")?;
            }
        }
    }

    writer.flush().context("Failed to flush output")?;
    info!(
        priced = summary.priced,
        unmailable = summary.unmailable,
        failed = summary.failed,
        "Session finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Cursor;

    fn session(config: &CliConfig, input: &str) -> (SessionSummary, String, String) {
        let engine = PostageEngine::default();
        let mut output = Vec::new();
        let mut prompt = Vec::new();
        let summary = run(&engine, config, Cursor::new(input), &mut output, &mut prompt).unwrap();
        (
            summary,
            String::from_utf8(output).unwrap(),
            String::from_utf8(prompt).unwrap(),
        )
    }

    #[test]
    fn test_five_line_session() {
        let input = "\
4.0,5.0,0.01,10000,90000
5.0,8.0,0.1,36000,36500
12.0,15.0,0.3,7000,63000
40.0,20.0,5.0,1,85000
100.0,50.0,50.0,1,1
4.0,5.0,0.01,1,1
";
        let (summary, output, prompt) = session(&CliConfig::default(), input);

        assert_eq!(output, ".32\n.37\n.75\n5.70\nUNMAILABLE\n");
        assert_eq!(
            summary,
            SessionSummary {
                priced: 4,
                unmailable: 1,
                failed: 0
            }
        );
        assert_eq!(prompt.matches(PROMPT).count(), 5);
    }

    #[test]
    fn test_errors_do_not_stop_the_session() {
        let input = "4.0,5.0\n4.0,5.0,0.01,0,1\n200,1,1,0,0\n";
        let config = CliConfig {
            iterations: 0,
            prompt: false,
            ..CliConfig::default()
        };
        let (summary, output, prompt) = session(&config, input);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ERROR: Parse error"));
        assert!(lines[1].starts_with("ERROR: Zone error"));
        assert_eq!(lines[2], "UNMAILABLE");
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.unmailable, 1);
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let (summary, output, _) = session(&CliConfig::default(), "5.0,8.0,0.1,1,99999\n");
        assert_eq!(output, ".57\n");
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn test_json_output() {
        let config = CliConfig {
            output: OutputFormat::Json,
            prompt: false,
            ..CliConfig::default()
        };
        let (_, output, _) = session(&config, "20,10,5,1,7000\n");
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["mail_class"], "package");
        assert_eq!(value["zone_distance"], 1);
        assert_eq!(value["postage"]["amount"], "3.20");
    }
}

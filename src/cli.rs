use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::config::{AppConfig, Unit};
use crate::error::{LazySeqError, LazySeqResult};
use crate::interleave::merge_producers;
use crate::telemetry::init_logger;

/// Merge inputs round-robin, one piece from each input per round.
#[derive(Debug, Parser)]
#[command(version, name = "lazyseq")]
pub struct Cli {
    /// Inputs to merge, in order.
    pub inputs: Vec<String>,
    /// Split inputs into characters, words or lines.
    #[arg(short, long, value_enum)]
    pub unit: Option<Unit>,
    /// String placed between merged pieces.
    #[arg(short, long)]
    pub separator: Option<String>,
    /// Read an input from a file; merged after the positional inputs.
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,
    /// TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the configuration and apply command line overrides on top.
    pub fn resolve_config(&self) -> LazySeqResult<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if let Some(separator) = &self.separator {
            config.separator = Some(separator.clone());
        }
        Ok(config)
    }

    fn read_inputs(&self) -> LazySeqResult<Vec<String>> {
        let mut texts = self.inputs.clone();
        for path in &self.files {
            let text = std::fs::read_to_string(path).map_err(|e| LazySeqError::io(path, e))?;
            debug!("read {} bytes from {}", text.len(), path.display());
            texts.push(text);
        }
        Ok(texts)
    }
}

/// Merge the inputs named by `cli` and return the joined output.
pub fn run(cli: &Cli, config: &AppConfig) -> LazySeqResult<String> {
    let texts = cli.read_inputs()?;
    info!("merging {} inputs by {:?}", texts.len(), config.unit);
    let pieces = merge_producers(texts.iter().map(|text| config.unit.producer(text)));
    Ok(pieces.join(config.separator()))
}

/// Parse `args`, load the configuration and print the merged sequence.
pub fn main(args: Vec<String>) -> LazySeqResult<()> {
    let cli = Cli::parse_from(args);
    let config = cli.resolve_config()?;
    init_logger(&config.log_filter)?;
    let output = run(&cli, &config)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn merged(args: &[&str]) -> Result<String, figment::Error> {
        let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
        let config = cli.resolve_config().map_err(|e| e.to_string())?;
        run(&cli, &config).map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn test_merge_positional_inputs() {
        Jail::expect_with(|_| {
            assert_eq!(merged(&["lazyseq", "dog", "cat"])?, "dcoagt");
            assert_eq!(merged(&["lazyseq", "abc", "pqrstu"])?, "apbqcrstu");
            assert_eq!(merged(&["lazyseq"])?, "");
            Ok(())
        });
    }

    #[test]
    fn test_merge_words_with_separator() {
        Jail::expect_with(|_| {
            let out = merged(&["lazyseq", "-u", "words", "-s", ",", "a b c", "x y"])?;
            assert_eq!(out, "a,x,b,y,c");
            let out = merged(&["lazyseq", "--unit", "words", "one two", "1 2 3"])?;
            assert_eq!(out, "one 1 two 2 3");
            Ok(())
        });
    }

    #[test]
    fn test_merge_files_after_inputs() {
        Jail::expect_with(|jail| {
            jail.create_file("a.txt", "first\nsecond\n")?;
            jail.create_file("b.txt", "alpha\n")?;
            let out = merged(&["lazyseq", "-u", "lines", "-f", "a.txt", "--file", "b.txt", "top"])?;
            assert_eq!(out, "top\nfirst\nalpha\nsecond");
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_reports_path() {
        Jail::expect_with(|_| {
            let cli =
                Cli::try_parse_from(["lazyseq", "-f", "nope.txt"]).map_err(|e| e.to_string())?;
            let config = cli.resolve_config().map_err(|e| e.to_string())?;
            let err = run(&cli, &config).unwrap_err();
            assert!(matches!(err, LazySeqError::Io { .. }));
            assert!(err.to_string().contains("nope.txt"));
            Ok(())
        });
    }

    #[test]
    fn test_cli_flags_override_env() {
        Jail::expect_with(|jail| {
            jail.set_env("LAZYSEQ__UNIT", "words");
            assert_eq!(merged(&["lazyseq", "ab cd", "ef"])?, "ab ef cd");
            assert_eq!(merged(&["lazyseq", "-u", "chars", "ab", "c"])?, "acb");
            Ok(())
        });
    }
}

use std::fmt;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::Deserialize;
use serde::de::{self, Visitor};

use crate::Producer;
use crate::build::from_iter;
use crate::error::{LazySeqError, LazySeqResult};

const DEFAULT_CONFIG: &str = include_str!("default.toml");
const ENV_PREFIX: &str = "LAZYSEQ__";
const SEPARATOR_KEY: &str = "separator";
const SEPARATOR_ENV: &str = "LAZYSEQ__SEPARATOR";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub unit: Unit,
    /// `None` selects [`Unit::default_separator`].
    #[serde(deserialize_with = "deserialize_separator")]
    pub separator: Option<String>,
    pub log_filter: String,
}

impl AppConfig {
    /// Load the embedded defaults, then `file` if given, then `LAZYSEQ__*`
    /// environment variables.
    ///
    /// `LAZYSEQ__SEPARATOR` is taken verbatim: figment would parse and trim
    /// it, losing whitespace separators.
    pub fn load(file: Option<&Path>) -> LazySeqResult<Self> {
        let mut figment = Figment::from(Toml::string(DEFAULT_CONFIG));
        if let Some(path) = file {
            if !path.is_file() {
                return Err(LazySeqError::invalid(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.admerge(Toml::file(path));
        }
        figment = figment.admerge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&[SEPARATOR_KEY])
                .map(|p| p.as_str().replace("__", ".").into()),
        );
        if let Ok(separator) = std::env::var(SEPARATOR_ENV) {
            figment = figment.admerge(Serialized::default(SEPARATOR_KEY, separator));
        }
        figment
            .extract()
            .map_err(|e| LazySeqError::InvalidArgument(e.to_string()))
    }

    /// String placed between merged pieces.
    pub fn separator(&self) -> &str {
        self.separator
            .as_deref()
            .unwrap_or_else(|| self.unit.default_separator())
    }
}

/// How an input text is split into the elements that get merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Chars,
    Words,
    Lines,
}

impl Unit {
    /// Separator used when none is configured.
    pub fn default_separator(self) -> &'static str {
        match self {
            Unit::Chars => "",
            Unit::Words => " ",
            Unit::Lines => "\n",
        }
    }

    /// A producer over the pieces of `text` for this unit.
    ///
    /// ```rust
    /// use lazyseq::config::Unit;
    /// use lazyseq::prelude::*;
    ///
    /// let words: Vec<_> = Unit::Words.producer("  the quick\tfox ").items().collect();
    /// assert_eq!(words, vec!["the", "quick", "fox"]);
    /// ```
    pub fn producer<'a>(self, text: &'a str) -> Box<dyn Producer<Item = &'a str> + 'a> {
        match self {
            Unit::Chars => from_iter(
                text.char_indices()
                    .map(move |(i, c)| &text[i..i + c.len_utf8()]),
            )
            .boxed(),
            Unit::Words => from_iter(text.split_whitespace()).boxed(),
            Unit::Lines => from_iter(text.lines()).boxed(),
        }
    }
}

/// Deserialize a separator from any scalar, keeping it as written.
///
/// Only an empty string maps to `None`; whitespace is a valid separator.
pub fn deserialize_separator<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct SeparatorVisitor;

    impl Visitor<'_> for SeparatorVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok((!v.is_empty()).then(|| v.to_string()))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }
    }

    deserializer.deserialize_any(SeparatorVisitor)
}

//! Rewrite configuration: format selection, defaults, and validation.
//!
//! Options arrive either as a single format string applied to both
//! directions or as an object with per-direction keys, matching the
//! JSON-carried options surface. Unknown values are rejected before any
//! scan runs, never silently defaulted.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::table::{ENCODINGS, Encoding};

/// Encoding selector accepted by the configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Every supported encoding (input), or "preserve the source encoding"
    /// (output).
    All,
    /// Raw characters only.
    Character,
    /// Named entity references only.
    Named,
    /// Numeric entity references only.
    Numeric,
}

impl Format {
    /// The encodings scanned when this format selects inputs.
    pub fn input_encodings(self) -> &'static [Encoding] {
        match self {
            Format::All => &ENCODINGS,
            Format::Character => &[Encoding::Character],
            Format::Named => &[Encoding::Named],
            Format::Numeric => &[Encoding::Numeric],
        }
    }

    /// The concrete output encoding, or `None` when each match's own source
    /// encoding is preserved.
    pub fn output_encoding(self) -> Option<Encoding> {
        match self {
            Format::All => None,
            Format::Character => Some(Encoding::Character),
            Format::Named => Some(Encoding::Named),
            Format::Numeric => Some(Encoding::Numeric),
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Format value outside the recognized set.
    #[error("unknown quote format {0:?}: expected one of all, character, named, numeric")]
    UnknownFormat(String),
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Format::All),
            "character" => Ok(Format::Character),
            "named" => Ok(Format::Named),
            "numeric" => Ok(Format::Numeric),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Options controlling one rewrite invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Encodings scanned for candidate matches.
    pub input_format: Format,
    /// Encoding of replacement glyphs; `All` preserves each match's own
    /// source encoding.
    pub output_format: Format,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            input_format: Format::Character,
            output_format: Format::All,
        }
    }
}

impl RewriteOptions {
    /// Uniform options: the same format for both directions.
    pub const fn uniform(format: Format) -> Self {
        Self {
            input_format: format,
            output_format: format,
        }
    }
}

impl FromStr for RewriteOptions {
    type Err = ConfigError;

    /// A single format string sets both directions.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::uniform(value.parse()?))
    }
}

/// Caller-supplied options as carried on the wire.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
pub enum OptionsSpec {
    /// A bare format string, applied to both directions.
    Uniform(Format),
    /// Per-direction keys with defaults for whichever is absent.
    Split {
        /// Encodings scanned for candidate matches.
        #[serde(default = "default_input_format", rename = "inputFormat")]
        input_format: Format,
        /// Encoding of replacement glyphs.
        #[serde(default = "default_output_format", rename = "outputFormat")]
        output_format: Format,
    },
}

fn default_input_format() -> Format {
    Format::Character
}

fn default_output_format() -> Format {
    Format::All
}

impl From<OptionsSpec> for RewriteOptions {
    fn from(spec: OptionsSpec) -> Self {
        match spec {
            OptionsSpec::Uniform(format) => Self::uniform(format),
            OptionsSpec::Split {
                input_format,
                output_format,
            } => Self {
                input_format,
                output_format,
            },
        }
    }
}

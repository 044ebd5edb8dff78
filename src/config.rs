// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-line window configuration.
//!
//! The only option is an optional first argument `WIDTHxHEIGHT` giving the
//! initial window size in logical pixels, e.g. `cliprect-pathline 720x1280`.

use std::num::ParseFloatError;

use kurbo::Size;
use thiserror::Error;

use crate::settings;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    Malformed(String),
    #[error("invalid dimension {value:?}: {source}")]
    NotANumber {
        value: String,
        source: ParseFloatError,
    },
    #[error("dimensions must be positive, got {width}x{height}")]
    NotPositive { width: f64, height: f64 },
}

/// Startup configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub window_size: Size,
}

impl Config {
    /// Build a config from the process arguments (excluding the program
    /// name).
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let window_size = match args.into_iter().next() {
            Some(arg) => parse_window_size(arg.as_ref())?,
            None => Self::default().window_size,
        };
        Ok(Self { window_size })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_size: Size::new(
                settings::window::DEFAULT_WIDTH,
                settings::window::DEFAULT_HEIGHT,
            ),
        }
    }
}

/// Parse `WIDTHxHEIGHT` (either `x` or `X` as separator)
pub fn parse_window_size(arg: &str) -> Result<Size, ConfigError> {
    let (w, h) = arg
        .split_once(['x', 'X'])
        .ok_or_else(|| ConfigError::Malformed(arg.to_string()))?;

    let parse = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|source| ConfigError::NotANumber {
                value: value.to_string(),
                source,
            })
    };
    let (width, height) = (parse(w)?, parse(h)?);

    if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
        return Err(ConfigError::NotPositive { width, height });
    }
    Ok(Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_uses_default() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.window_size, Size::new(1280.0, 800.0));
    }

    #[test]
    fn test_parse_window_size() {
        assert_eq!(parse_window_size("720x1280"), Ok(Size::new(720.0, 1280.0)));
        assert_eq!(parse_window_size("640X480"), Ok(Size::new(640.0, 480.0)));
        assert_eq!(parse_window_size(" 300 x 200 "), Ok(Size::new(300.0, 200.0)));
    }

    #[test]
    fn test_from_args_reads_first_argument() {
        let config = Config::from_args(["1024x768", "ignored"]).unwrap();
        assert_eq!(config.window_size, Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_malformed_size() {
        assert_eq!(
            parse_window_size("1024"),
            Err(ConfigError::Malformed("1024".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_size() {
        assert!(matches!(
            parse_window_size("widex768"),
            Err(ConfigError::NotANumber { value, .. }) if value == "wide"
        ));
    }

    #[test]
    fn test_non_positive_size() {
        assert!(matches!(
            parse_window_size("0x768"),
            Err(ConfigError::NotPositive { .. })
        ));
        assert!(matches!(
            parse_window_size("-5x10"),
            Err(ConfigError::NotPositive { .. })
        ));
    }
}

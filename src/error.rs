// SPDX-License-Identifier: MPL-2.0
use crate::domain::swipe::InvalidThresholds;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Settings(InvalidThresholds),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Settings(e) => write!(f, "Settings Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<InvalidThresholds> for Error {
    fn from(err: InvalidThresholds) -> Self {
        Error::Settings(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.expect_err("invalid toml").into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn invalid_thresholds_become_settings_error() {
        let err: Error = InvalidThresholds {
            peek: 120.0,
            commit: 80.0,
        }
        .into();
        assert!(format!("{}", err).starts_with("Settings Error:"));
    }
}

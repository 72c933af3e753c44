// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Slides(SlideDeckError),
}

/// Specific failures while reading a slide deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideDeckError {
    /// The deck file is not valid TOML or does not match the slide schema.
    Malformed(String),

    /// The deck parsed but declares no slides.
    Empty,

    /// A slide is missing a required, non-empty field.
    MissingField {
        /// Zero-based position of the offending slide in the deck.
        index: usize,
        /// Name of the empty field.
        field: &'static str,
    },
}

impl fmt::Display for SlideDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideDeckError::Malformed(msg) => write!(f, "Malformed slide deck: {}", msg),
            SlideDeckError::Empty => write!(f, "Slide deck contains no slides"),
            SlideDeckError::MissingField { index, field } => {
                write!(f, "Slide {} has an empty `{}` field", index, field)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Slides(e) => write!(f, "Slides Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SlideDeckError> for Error {
    fn from(err: SlideDeckError) -> Self {
        Error::Slides(err)
    }
}

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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk unplugged".into());
        assert_eq!(format!("{}", err), "I/O Error: disk unplugged");
    }

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad value".into());
        assert_eq!(format!("{}", err), "Config Error: bad value");
    }

    #[test]
    fn display_formats_missing_field() {
        let err = Error::from(SlideDeckError::MissingField {
            index: 2,
            field: "title",
        });
        assert_eq!(
            format!("{}", err),
            "Slides Error: Slide 2 has an empty `title` field"
        );
    }

    #[test]
    fn from_io_error_preserves_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing deck");
        match Error::from(io) {
            Error::Io(msg) => assert!(msg.contains("missing deck")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn from_toml_error_maps_to_config() {
        let parse_err = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        assert!(matches!(Error::from(parse_err), Error::Config(_)));
    }
}

// Crate error types

use std::fmt;
use std::path::PathBuf;

/// Which operand of a two-sided comparison an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Actual,
    Expected,
}

impl Side {
    /// Label padded to line up with the other diagnostic rows
    pub fn label(self) -> &'static str {
        match self {
            Side::Actual => "  actual",
            Side::Expected => "expected",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_start())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON on the {side} side: {source}")]
    InvalidJson {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Actual.to_string(), "actual");
        assert_eq!(Side::Expected.to_string(), "expected");
        assert_eq!(Side::Actual.label().len(), Side::Expected.label().len());
    }

    #[test]
    fn test_invalid_json_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::InvalidJson {
            side: Side::Expected,
            source,
        };
        assert!(err.to_string().starts_with("invalid JSON on the expected side"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

//! Station code types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidStationId {
    code: String,
    reason: &'static str,
}

/// A valid line-qualified metro station code.
///
/// A code is a line prefix of 1-3 uppercase ASCII letters, followed by
/// 1-3 digits, optionally followed by one uppercase letter for branch
/// stations. This type guarantees that any `StationId` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use explorer_server::domain::StationId;
///
/// let main = StationId::parse("BL22").unwrap();
/// assert_eq!(main.as_str(), "BL22");
/// assert_eq!(main.line_code(), "BL");
///
/// // Branch stations carry a letter suffix
/// assert!(StationId::parse("R22A").is_ok());
///
/// // Lowercase and missing digits are rejected
/// assert!(StationId::parse("bl22").is_err());
/// assert!(StationId::parse("Unknown").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId {
    code: String,
    prefix_len: u8,
}

impl StationId {
    /// Parse a station code from a string.
    ///
    /// The input must already be in canonical (uppercase, untrimmed) form.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let invalid = |reason| InvalidStationId {
            code: s.to_string(),
            reason,
        };
        let bytes = s.as_bytes();

        let prefix_len = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
        if prefix_len == 0 || prefix_len > 3 {
            return Err(invalid("line prefix must be 1-3 uppercase letters"));
        }

        let rest = &bytes[prefix_len..];
        let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || digits > 3 {
            return Err(invalid("station number must be 1-3 digits"));
        }

        match &rest[digits..] {
            [] => {}
            [suffix] if suffix.is_ascii_uppercase() => {}
            _ => return Err(invalid("only a single uppercase branch letter may follow the number")),
        }

        Ok(Self {
            code: s.to_string(),
            prefix_len: prefix_len as u8,
        })
    }

    /// Parse a station code after trimming whitespace and uppercasing.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationId> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the line prefix, e.g. `"BL"` for `BL22`.
    pub fn line_code(&self) -> &str {
        &self.code[..self.prefix_len as usize]
    }
}

impl TryFrom<String> for StationId {
    type Error = InvalidStationId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.code
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

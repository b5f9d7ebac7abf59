use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::MediaError;

/// Quality the sender asked for when attaching media.
///
/// Persisted preferences store the integer code, so codes are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentMediaQuality {
    #[default]
    Standard,
    High,
}

impl SentMediaQuality {
    pub fn code(self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::High => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Standard),
            1 => Some(Self::High),
            _ => None,
        }
    }
}

impl FromStr for SentMediaQuality {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "0" => Ok(Self::Standard),
            "high" | "1" => Ok(Self::High),
            other => Err(MediaError::UnknownQuality(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(SentMediaQuality::Standard.code(), 0);
        assert_eq!(SentMediaQuality::High.code(), 1);
        assert_eq!(SentMediaQuality::from_code(1), Some(SentMediaQuality::High));
        assert_eq!(SentMediaQuality::from_code(7), None);
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("HIGH".parse::<SentMediaQuality>().unwrap(), SentMediaQuality::High);
        assert_eq!(" standard ".parse::<SentMediaQuality>().unwrap(), SentMediaQuality::Standard);
        assert_eq!(
            "ultra".parse::<SentMediaQuality>(),
            Err(MediaError::UnknownQuality("ultra".to_string()))
        );
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(SentMediaQuality::default(), SentMediaQuality::Standard);
    }

    #[test]
    fn quality_serialization() {
        assert_eq!(
            serde_json::to_string(&SentMediaQuality::High).unwrap(),
            "\"high\""
        );
    }
}

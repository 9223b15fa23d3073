//! Seasons: `2001-21`, `2001-21^southernHemisphere`

use super::component::Year;
use serde::Serialize;
use std::fmt;

/// The four reserved season codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonCode {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonCode {
    pub fn from_code(code: u8) -> Option<SeasonCode> {
        match code {
            21 => Some(SeasonCode::Spring),
            22 => Some(SeasonCode::Summer),
            23 => Some(SeasonCode::Autumn),
            24 => Some(SeasonCode::Winter),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            SeasonCode::Spring => 21,
            SeasonCode::Summer => 22,
            SeasonCode::Autumn => 23,
            SeasonCode::Winter => 24,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SeasonCode::Spring => "spring",
            SeasonCode::Summer => "summer",
            SeasonCode::Autumn => "autumn",
            SeasonCode::Winter => "winter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub year: Year,
    pub code: SeasonCode,
    /// Free text after `^`, stored verbatim
    pub qualifier: Option<String>,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year.literal(), self.code.code())?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "^{qualifier}")?;
        }
        Ok(())
    }
}

use std::fmt;
use std::str::FromStr;

use crate::types::{CompanyName, IndustryLabel, Marketcap, Year};
use crate::Error;

/// Selects a single value out of a `CompanyRecord`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordField {
    Marketcap(Year),
    /// The display name
    Name,
    LegalName,
    Industry,
}

/// A single value read out of a `CompanyRecord`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Marketcap(Marketcap),
    Name(CompanyName),
    LegalName(CompanyName),
    Industry(IndustryLabel),
}

impl FieldValue {
    pub fn as_marketcap(&self) -> Option<Marketcap> {
        match self {
            FieldValue::Marketcap(marketcap) => Some(*marketcap),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Marketcap(_) => None,
            FieldValue::Name(text) | FieldValue::LegalName(text) | FieldValue::Industry(text) => {
                Some(text.as_str())
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Marketcap(marketcap) => write!(f, "{}", marketcap),
            FieldValue::Name(text) | FieldValue::LegalName(text) | FieldValue::Industry(text) => {
                f.write_str(text)
            }
        }
    }
}

impl FromStr for RecordField {
    type Err = Error;

    /// Accepts `"name"`, `"legal_name"`, `"industry"` or a year such as `"2007"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(RecordField::Name),
            "legal_name" => Ok(RecordField::LegalName),
            "industry" => Ok(RecordField::Industry),
            other => other
                .parse::<Year>()
                .map(RecordField::Marketcap)
                .map_err(|_| Error::InvalidField(other.to_string())),
        }
    }
}

impl From<Year> for RecordField {
    fn from(year: Year) -> Self {
        RecordField::Marketcap(year)
    }
}

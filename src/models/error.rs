use std::fmt;

use crate::types::{SimilarityScore, TickerSymbol};

#[derive(Debug)]
pub enum Error {
    /// A ticker symbol or company name has no corresponding record.
    NotFound(String),
    /// The best fuzzy candidate scored below the accepted threshold.
    NoConfidentMatch {
        query: String,
        best_score: Option<SimilarityScore>,
        threshold: SimilarityScore,
    },
    /// A ticker in the yearly market cap feed has no entry in the name feed.
    MissingCompanyName(TickerSymbol),
    InvalidField(String),
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not Found: {}", msg),
            Error::NoConfidentMatch {
                query,
                best_score,
                threshold,
            } => match best_score {
                Some(score) => write!(
                    f,
                    "No Confident Match: best score for \"{}\" was {} (threshold {})",
                    query, score, threshold
                ),
                None => write!(
                    f,
                    "No Confident Match: no candidates to compare \"{}\" against",
                    query
                ),
            },
            Error::MissingCompanyName(ticker_symbol) => {
                write!(f, "Missing Company Name: {}", ticker_symbol)
            }
            Error::InvalidField(field) => write!(f, "Invalid Field: {}", field),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

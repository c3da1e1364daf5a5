use std::collections::HashSet;

use crate::types::{Marketcap, TickerSymbol, Year};
use crate::Error;

/// Market cap history for every ticker over one shared set of years.
///
/// This feed defines the ticker universe of a `Lexicon`. Each row holds one value per entry
/// of `years`, in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct YearlyMarketcapFeed {
    years: Vec<Year>,
    rows: Vec<(TickerSymbol, Vec<Marketcap>)>,
}

impl YearlyMarketcapFeed {
    pub fn new(years: Vec<Year>) -> Self {
        Self {
            years,
            rows: Vec::new(),
        }
    }

    /// Same as `new`, but fails when a year appears more than once.
    pub fn try_new(years: Vec<Year>) -> Result<Self, Error> {
        Self::check_years(&years)?;

        Ok(Self::new(years))
    }

    /// Fails with a `ParserError` naming the first repeated year.
    pub fn check_years(years: &[Year]) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(years.len());

        match years.iter().find(|&&year| !seen.insert(year)) {
            Some(year) => Err(Error::ParserError(format!("Duplicate year column: {}", year))),
            None => Ok(()),
        }
    }

    /// Appends a row. Fails when the number of values doesn't match the number of years.
    pub fn push_row(
        &mut self,
        ticker_symbol: TickerSymbol,
        marketcaps: Vec<Marketcap>,
    ) -> Result<(), Error> {
        if marketcaps.len() != self.years.len() {
            return Err(Error::ParserError(format!(
                "Expected {} market cap values for {}, got {}",
                self.years.len(),
                ticker_symbol,
                marketcaps.len()
            )));
        }

        self.rows.push((ticker_symbol, marketcaps));

        Ok(())
    }

    /// Builder form of `push_row`, handy for literal feeds.
    pub fn with_row<T: Into<TickerSymbol>>(
        mut self,
        ticker_symbol: T,
        marketcaps: Vec<Marketcap>,
    ) -> Result<Self, Error> {
        self.push_row(ticker_symbol.into(), marketcaps)?;
        Ok(self)
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn rows(&self) -> &[(TickerSymbol, Vec<Marketcap>)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

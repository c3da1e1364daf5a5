use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::ops::{Range, RangeInclusive};

use crate::models::{
    CompanyRecord, FieldValue, LevenshteinScorer, LexiconConfig, MarketcapCategory,
    MissingNamePolicy, NameCleaner, RecordField, SimilarityScorer, YearlyMarketcapFeed,
};
use crate::types::{
    CompanyGeneralization, CompanyName, IndustryFeed, IndustryLabel, Marketcap, NameFeed,
    SimilarityScore, TickerSymbol, Year,
};
use crate::utils::{normalize_industry_label, sort_names_for_text_search};
use crate::Error;

/// A company name located inside a piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameMatch {
    pub ticker_symbol: TickerSymbol,
    pub name: CompanyName,
    /// Byte range of `name` within the searched text.
    pub range: Range<usize>,
}

/// In-memory lookup of public companies, merged from a name feed, an industry feed and a
/// yearly market cap feed.
///
/// The lexicon is immutable once built. Its name indexes are computed during construction, so
/// it can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Lexicon {
    records: Vec<CompanyRecord>,
    record_index: HashMap<TickerSymbol, usize>,
    years: Vec<Year>,
    name_to_ticker: HashMap<CompanyName, TickerSymbol>,
    /// Display names in record order (the fuzzy match corpus)
    all_names: Vec<CompanyName>,
    /// Display names in the order they are scanned for in free text
    text_search_names: Vec<CompanyName>,
    name_cleaner: NameCleaner,
    fuzzy_threshold: SimilarityScore,
    default_year: Year,
}

impl Lexicon {
    /// Builds a lexicon using `LexiconConfig::default()`.
    pub fn build(
        name_feed: &NameFeed,
        industry_feed: &IndustryFeed,
        yearly_marketcap_feed: &YearlyMarketcapFeed,
    ) -> Result<Self, Error> {
        Self::build_with_config(
            name_feed,
            industry_feed,
            yearly_marketcap_feed,
            &LexiconConfig::default(),
        )
    }

    /// Builds one record per ticker of `yearly_marketcap_feed`.
    ///
    /// Tickers missing from `industry_feed` get an empty industry. Tickers missing from
    /// `name_feed` are handled according to `config.missing_name_policy`.
    pub fn build_with_config(
        name_feed: &NameFeed,
        industry_feed: &IndustryFeed,
        yearly_marketcap_feed: &YearlyMarketcapFeed,
        config: &LexiconConfig,
    ) -> Result<Self, Error> {
        let name_cleaner = NameCleaner::new(config.extra_name_removals.as_slice());
        let years = yearly_marketcap_feed.years().to_vec();
        YearlyMarketcapFeed::check_years(&years)?;

        let mut records: Vec<CompanyRecord> = Vec::with_capacity(yearly_marketcap_feed.len());
        let mut record_index: HashMap<TickerSymbol, usize> =
            HashMap::with_capacity(yearly_marketcap_feed.len());

        for (ticker_symbol, marketcaps) in yearly_marketcap_feed.rows() {
            let legal_name = match name_feed.get(ticker_symbol) {
                Some(legal_name) => legal_name.clone(),
                None => match config.missing_name_policy {
                    MissingNamePolicy::Error => {
                        return Err(Error::MissingCompanyName(ticker_symbol.clone()))
                    }
                    MissingNamePolicy::EmptyName => {
                        warn!("No company name for {}; using an empty name", ticker_symbol);
                        CompanyName::new()
                    }
                },
            };

            let record = CompanyRecord {
                ticker_symbol: ticker_symbol.clone(),
                display_name: name_cleaner.clean(&legal_name),
                legal_name,
                industry: industry_feed.get(ticker_symbol).cloned().unwrap_or_default(),
                marketcap_by_year: years
                    .iter()
                    .copied()
                    .zip(marketcaps.iter().copied())
                    .collect::<BTreeMap<_, _>>(),
            };

            match record_index.get(ticker_symbol) {
                Some(&position) => {
                    warn!(
                        "Duplicate ticker symbol {}; keeping the later row",
                        ticker_symbol
                    );
                    records[position] = record;
                }
                None => {
                    record_index.insert(ticker_symbol.clone(), records.len());
                    records.push(record);
                }
            }
        }

        let mut name_to_ticker: HashMap<CompanyName, TickerSymbol> =
            HashMap::with_capacity(records.len());
        for record in records.iter().filter(|record| !record.display_name.is_empty()) {
            if let Some(previous) =
                name_to_ticker.insert(record.display_name.clone(), record.ticker_symbol.clone())
            {
                debug!(
                    "Display name \"{}\" is shared by {} and {}; resolving to {}",
                    record.display_name, previous, record.ticker_symbol, record.ticker_symbol
                );
            }
        }

        for (name, ticker_symbol) in &config.name_overrides {
            if record_index.contains_key(ticker_symbol) {
                name_to_ticker.insert(name.clone(), ticker_symbol.clone());
            } else {
                warn!(
                    "Dropping name override \"{}\": unknown ticker symbol {}",
                    name, ticker_symbol
                );
            }
        }

        let all_names: Vec<CompanyName> = records
            .iter()
            .filter(|record| !record.display_name.is_empty())
            .map(|record| record.display_name.clone())
            .collect();

        let text_search_names = sort_names_for_text_search(&all_names);

        info!(
            "Built lexicon with {} tickers over {} years",
            records.len(),
            years.len()
        );

        Ok(Self {
            records,
            record_index,
            years,
            name_to_ticker,
            all_names,
            text_search_names,
            name_cleaner,
            fuzzy_threshold: config.fuzzy_threshold,
            default_year: config.default_year,
        })
    }

    pub fn get_record(&self, ticker_symbol: &str) -> Result<&CompanyRecord, Error> {
        self.record_index
            .get(ticker_symbol)
            .map(|&position| &self.records[position])
            .ok_or_else(|| Error::NotFound(format!("ticker symbol {}", ticker_symbol)))
    }

    pub fn get_field(&self, ticker_symbol: &str, field: RecordField) -> Result<FieldValue, Error> {
        let record = self.get_record(ticker_symbol)?;

        Ok(match field {
            RecordField::Marketcap(year) => FieldValue::Marketcap(record.marketcap(year)),
            RecordField::Name => FieldValue::Name(record.display_name.clone()),
            RecordField::LegalName => FieldValue::LegalName(record.legal_name.clone()),
            RecordField::Industry => FieldValue::Industry(record.industry.clone()),
        })
    }

    /// Same as `get_field`, with the field given as `"name"`, `"legal_name"`, `"industry"` or a
    /// year such as `"2007"`.
    pub fn get(&self, ticker_symbol: &str, field: &str) -> Result<FieldValue, Error> {
        // Unknown tickers take precedence over malformed fields
        self.get_record(ticker_symbol)?;

        self.get_field(ticker_symbol, field.parse()?)
    }

    pub fn categorize(marketcap: Marketcap) -> MarketcapCategory {
        MarketcapCategory::categorize(marketcap)
    }

    pub fn size(&self, ticker_symbol: &str, year: Year) -> Result<MarketcapCategory, Error> {
        let record = self.get_record(ticker_symbol)?;

        Ok(MarketcapCategory::categorize(record.marketcap(year)))
    }

    /// Industry category with spaces replaced by underscores, or an empty string.
    pub fn industry(&self, ticker_symbol: &str) -> Result<IndustryLabel, Error> {
        let record = self.get_record(ticker_symbol)?;

        Ok(normalize_industry_label(&record.industry))
    }

    /// Exact lookup of a display name (or a configured override name).
    pub fn ticker_from_name(&self, name: &str) -> Result<&TickerSymbol, Error> {
        self.name_to_ticker
            .get(name)
            .ok_or_else(|| Error::NotFound(format!("company name \"{}\"", name)))
    }

    /// Fuzzy lookup using the configured threshold and the default scorer.
    pub fn fuzzy_ticker_from_name(&self, name: &str) -> Result<&TickerSymbol, Error> {
        self.fuzzy_ticker_from_name_with_threshold(name, self.fuzzy_threshold)
    }

    pub fn fuzzy_ticker_from_name_with_threshold(
        &self,
        name: &str,
        threshold: SimilarityScore,
    ) -> Result<&TickerSymbol, Error> {
        self.fuzzy_ticker_from_name_with_scorer(name, threshold, &LevenshteinScorer)
    }

    /// Resolves `name` to the ticker of the best scoring display name, provided that score is
    /// at least `threshold`. The first name reaching the best score wins.
    pub fn fuzzy_ticker_from_name_with_scorer<S: SimilarityScorer + ?Sized>(
        &self,
        name: &str,
        threshold: SimilarityScore,
        scorer: &S,
    ) -> Result<&TickerSymbol, Error> {
        let mut best_match: Option<(&CompanyName, SimilarityScore)> = None;

        for candidate in &self.all_names {
            let score = scorer.score(name, candidate);

            if best_match.map_or(true, |(_, best_score)| score > best_score) {
                best_match = Some((candidate, score));
            }
        }

        match best_match {
            Some((candidate, score)) if score >= threshold => {
                debug!(
                    "Fuzzy matched \"{}\" to \"{}\" with score {}",
                    name, candidate, score
                );
                self.ticker_from_name(candidate)
            }
            _ => Err(Error::NoConfidentMatch {
                query: name.to_string(),
                best_score: best_match.map(|(_, score)| score),
                threshold,
            }),
        }
    }

    /// Returns the first display name contained in `text`.
    ///
    /// Names are tried longest first (ties alphabetically), and containment is a plain
    /// substring test: a short name can match inside a longer word.
    pub fn find_name_in_text(&self, text: &str) -> Option<NameMatch> {
        self.text_search_names.iter().find_map(|name| {
            let start = text.find(name.as_str())?;
            let ticker_symbol = self.name_to_ticker.get(name)?;

            Some(NameMatch {
                ticker_symbol: ticker_symbol.clone(),
                name: name.clone(),
                range: start..start + name.len(),
            })
        })
    }

    pub fn size_from_name(&self, name: &str, year: Year) -> Result<MarketcapCategory, Error> {
        let ticker_symbol = self.ticker_from_name(name)?;

        self.size(ticker_symbol, year)
    }

    pub fn industry_from_name(&self, name: &str) -> Result<IndustryLabel, Error> {
        let ticker_symbol = self.ticker_from_name(name)?;

        self.industry(ticker_symbol)
    }

    pub fn generalize_ticker(
        &self,
        ticker_symbol: &str,
        year: Year,
    ) -> Result<CompanyGeneralization, Error> {
        Ok((self.size(ticker_symbol, year)?, self.industry(ticker_symbol)?))
    }

    pub fn generalize_name(&self, name: &str, year: Year) -> Result<CompanyGeneralization, Error> {
        let ticker_symbol = self.ticker_from_name(name)?;

        self.generalize_ticker(ticker_symbol, year)
    }

    /// Generalizes either a ticker symbol or a company name, trying the ticker first.
    pub fn generalize(
        &self,
        ticker_symbol_or_name: &str,
        year: Year,
    ) -> Result<CompanyGeneralization, Error> {
        if self.record_index.contains_key(ticker_symbol_or_name) {
            return self.generalize_ticker(ticker_symbol_or_name, year);
        }

        match self.name_to_ticker.get(ticker_symbol_or_name) {
            Some(ticker_symbol) => self.generalize_ticker(ticker_symbol, year),
            None => Err(Error::NotFound(format!(
                "ticker symbol or company name \"{}\"",
                ticker_symbol_or_name
            ))),
        }
    }

    /// Display names of every record with a non-empty name, in feed order.
    pub fn list_all_names(&self) -> &[CompanyName] {
        &self.all_names
    }

    pub fn records(&self) -> impl Iterator<Item = &CompanyRecord> {
        self.records.iter()
    }

    pub fn ticker_symbols(&self) -> impl Iterator<Item = &TickerSymbol> {
        self.records.iter().map(|record| &record.ticker_symbol)
    }

    pub fn name_cleaner(&self) -> &NameCleaner {
        &self.name_cleaner
    }

    pub fn default_year(&self) -> Year {
        self.default_year
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn total_tickers(&self) -> usize {
        self.records.len()
    }

    pub fn total_years(&self) -> usize {
        self.years.len()
    }

    pub fn year_start(&self) -> Option<Year> {
        self.years.iter().min().copied()
    }

    pub fn year_end(&self) -> Option<Year> {
        self.years.iter().max().copied()
    }

    pub fn range_years(&self) -> Option<RangeInclusive<Year>> {
        Some(self.year_start()?..=self.year_end()?)
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stocks")?;
        writeln!(f, "Total Tickers: {}", self.total_tickers())?;
        match self.range_years() {
            Some(range_years) => write!(
                f,
                "Data Range: {}-{}",
                range_years.start(),
                range_years.end()
            ),
            None => write!(f, "Data Range: none"),
        }
    }
}

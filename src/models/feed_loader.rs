use csv::{ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::constants::{
    GZIP_FILE_EXTENSION, INDUSTRY_FEED_FILE_NAME, NAME_FEED_FILE_NAME,
    YEARLY_MARKETCAP_FEED_FILE_NAME,
};
use crate::models::{Lexicon, LexiconConfig, YearlyMarketcapFeed};
use crate::types::{IndustryFeed, Marketcap, NameFeed, Year};
use crate::Error;

/// The three feeds a `Lexicon` is built from.
#[derive(Clone, Debug, Default)]
pub struct Feeds {
    pub name_feed: NameFeed,
    pub industry_feed: IndustryFeed,
    pub yearly_marketcap_feed: YearlyMarketcapFeed,
}

impl Feeds {
    pub fn into_lexicon(self, config: &LexiconConfig) -> Result<Lexicon, Error> {
        Lexicon::build_with_config(
            &self.name_feed,
            &self.industry_feed,
            &self.yearly_marketcap_feed,
            config,
        )
    }
}

/// Reads the name, industry and yearly market cap CSV feeds.
pub struct FeedLoader {}

impl FeedLoader {
    /// Loads `marketcap.csv`, `industry.csv` and `marketcap-years.csv` from `directory`.
    ///
    /// A gzipped variant (e.g. `marketcap.csv.gz`) is used when the plain file is absent.
    pub fn load_directory<P: AsRef<Path>>(directory: P) -> Result<Feeds, Error> {
        let directory = directory.as_ref();

        let name_feed =
            Self::read_name_feed(Self::open_feed(&directory.join(NAME_FEED_FILE_NAME))?)?;
        let industry_feed =
            Self::read_industry_feed(Self::open_feed(&directory.join(INDUSTRY_FEED_FILE_NAME))?)?;
        let yearly_marketcap_feed = Self::read_yearly_marketcap_feed(Self::open_feed(
            &directory.join(YEARLY_MARKETCAP_FEED_FILE_NAME),
        )?)?;

        Ok(Feeds {
            name_feed,
            industry_feed,
            yearly_marketcap_feed,
        })
    }

    /// Loads the feeds from `directory` and builds a lexicon from them.
    pub fn load_lexicon<P: AsRef<Path>>(
        directory: P,
        config: &LexiconConfig,
    ) -> Result<Lexicon, Error> {
        Self::load_directory(directory)?.into_lexicon(config)
    }

    /// Opens a feed file, decompressing it if it is gzipped.
    pub fn open_feed(path: &Path) -> Result<Box<dyn Read>, Error> {
        let is_gzipped = path
            .extension()
            .map_or(false, |extension| extension == GZIP_FILE_EXTENSION);

        if is_gzipped {
            debug!("Reading gzipped feed {:?}", path);
            return Ok(Box::new(GzDecoder::new(BufReader::new(File::open(path)?))));
        }

        if path.exists() {
            debug!("Reading feed {:?}", path);
            return Ok(Box::new(BufReader::new(File::open(path)?)));
        }

        let mut gzipped_path = PathBuf::from(path).into_os_string();
        gzipped_path.push(".");
        gzipped_path.push(GZIP_FILE_EXTENSION);
        let gzipped_path = PathBuf::from(gzipped_path);

        if gzipped_path.exists() {
            debug!("Reading gzipped feed {:?}", gzipped_path);
            return Ok(Box::new(GzDecoder::new(BufReader::new(File::open(
                gzipped_path,
            )?))));
        }

        // Surface the original path in the error
        Ok(Box::new(File::open(path)?))
    }

    /// Reads a `marketcap,name,ticker` feed.
    pub fn read_name_feed<R: Read>(reader: R) -> Result<NameFeed, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        if headers.len() < 3 {
            return Err(Error::ParserError(
                "Expected at least 3 columns (marketcap, name, ticker)".to_string(),
            ));
        }

        let mut name_feed = NameFeed::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let company_name = Self::required_field(&record, 1, "name")?;
            let ticker_symbol = Self::required_field(&record, 2, "ticker")?.to_uppercase();

            if ticker_symbol.is_empty() {
                warn!("Skipping name feed row without a ticker: {:?}", record);
                continue;
            }

            name_feed.insert(ticker_symbol, company_name.to_string());
        }

        Ok(name_feed)
    }

    /// Reads a `ticker,industry` feed.
    pub fn read_industry_feed<R: Read>(reader: R) -> Result<IndustryFeed, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        if headers.len() < 2 {
            return Err(Error::ParserError(
                "Expected at least 2 columns (ticker, industry)".to_string(),
            ));
        }

        let mut industry_feed = IndustryFeed::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let ticker_symbol = Self::required_field(&record, 0, "ticker")?.to_uppercase();
            let industry = record.get(1).map(str::trim).unwrap_or_default();

            if ticker_symbol.is_empty() {
                warn!("Skipping industry feed row without a ticker: {:?}", record);
                continue;
            }

            industry_feed.insert(ticker_symbol, industry.to_string());
        }

        Ok(industry_feed)
    }

    /// Reads a `ticker,<year>,<year>,...` feed. Empty values are stored as `0`.
    pub fn read_yearly_marketcap_feed<R: Read>(reader: R) -> Result<YearlyMarketcapFeed, Error> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        if headers.len() < 2 {
            return Err(Error::ParserError(
                "Expected at least 2 columns (ticker, year, ...)".to_string(),
            ));
        }

        let years = headers
            .iter()
            .skip(1)
            .map(|year| {
                year.trim()
                    .parse::<Year>()
                    .map_err(|_| Error::ParserError(format!("Invalid year column: {}", year)))
            })
            .collect::<Result<Vec<Year>, Error>>()?;

        let mut yearly_marketcap_feed = YearlyMarketcapFeed::try_new(years)?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let ticker_symbol = Self::required_field(&record, 0, "ticker")?.to_uppercase();

            let marketcaps = record
                .iter()
                .skip(1)
                .map(Self::parse_marketcap)
                .collect::<Result<Vec<Marketcap>, Error>>()?;

            yearly_marketcap_feed.push_row(ticker_symbol, marketcaps)?;
        }

        Ok(yearly_marketcap_feed)
    }

    pub fn read_name_feed_from_string(csv: &str) -> Result<NameFeed, Error> {
        Self::read_name_feed(Cursor::new(csv))
    }

    pub fn read_industry_feed_from_string(csv: &str) -> Result<IndustryFeed, Error> {
        Self::read_industry_feed(Cursor::new(csv))
    }

    pub fn read_yearly_marketcap_feed_from_string(
        csv: &str,
    ) -> Result<YearlyMarketcapFeed, Error> {
        Self::read_yearly_marketcap_feed(Cursor::new(csv))
    }

    /// Parses a market cap cell. Values may be floats (cents are dropped) and empty cells are `0`.
    pub fn parse_marketcap(value: &str) -> Result<Marketcap, Error> {
        let value = value.trim();

        if value.is_empty() {
            return Ok(0);
        }

        let parsed = value
            .parse::<f64>()
            .map_err(|_| Error::ParserError(format!("Invalid market cap value: {}", value)))?;

        if !parsed.is_finite() || parsed < 0.0 || parsed >= Marketcap::MAX as f64 {
            return Err(Error::ParserError(format!(
                "Invalid market cap value: {}",
                value
            )));
        }

        Ok(parsed.trunc() as Marketcap)
    }

    fn required_field<'r>(
        record: &'r StringRecord,
        index: usize,
        field_name: &str,
    ) -> Result<&'r str, Error> {
        record
            .get(index)
            .map(str::trim)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", field_name)))
    }
}

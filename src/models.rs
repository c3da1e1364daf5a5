pub mod company_record;
pub use company_record::CompanyRecord;

pub mod error;
pub use error::Error;

pub mod feed_loader;
pub use feed_loader::{FeedLoader, Feeds};

pub mod lexicon;
pub use lexicon::{Lexicon, NameMatch};

pub mod lexicon_config;
pub use lexicon_config::{LexiconConfig, MissingNamePolicy};

pub mod marketcap_category;
pub use marketcap_category::MarketcapCategory;

pub mod name_cleaner;
pub use name_cleaner::NameCleaner;

pub mod record_field;
pub use record_field::{FieldValue, RecordField};

pub mod similarity_scorer;
pub use similarity_scorer::{LevenshteinScorer, SimilarityScorer};

pub mod yearly_marketcap_feed;
pub use yearly_marketcap_feed::YearlyMarketcapFeed;

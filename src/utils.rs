pub mod categorize_marketcaps;
pub mod clean_company_names;
pub mod normalize_industry_label;
pub mod sort_names_for_text_search;

pub use categorize_marketcaps::categorize_marketcaps;
pub use clean_company_names::clean_company_names;
pub use normalize_industry_label::normalize_industry_label;
pub use sort_names_for_text_search::sort_names_for_text_search;

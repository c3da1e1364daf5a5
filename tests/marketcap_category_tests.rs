use stocks_lexicon::{categorize_marketcaps, Lexicon, MarketcapCategory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_land_in_upper_bucket() {
        let cases = [
            (0, MarketcapCategory::Nano),
            (49_999_999, MarketcapCategory::Nano),
            (50_000_000, MarketcapCategory::Micro),
            (299_999_999, MarketcapCategory::Micro),
            (300_000_000, MarketcapCategory::Small),
            (1_999_999_999, MarketcapCategory::Small),
            (2_000_000_000, MarketcapCategory::Mid),
            (9_999_999_999, MarketcapCategory::Mid),
            (10_000_000_000, MarketcapCategory::Large),
            (199_999_999_999, MarketcapCategory::Large),
            (200_000_000_000, MarketcapCategory::Mega),
            (u64::MAX, MarketcapCategory::Mega),
        ];

        for (marketcap, expected) in cases {
            assert_eq!(
                MarketcapCategory::categorize(marketcap),
                expected,
                "Unexpected category for {}",
                marketcap
            );
        }
    }

    #[test]
    fn test_categorize_is_monotonic() {
        let mut previous_rank = 0;
        let mut marketcap: u64 = 1;

        while marketcap < 1_000_000_000_000 {
            let rank = Lexicon::categorize(marketcap).rank();
            assert!(rank >= previous_rank, "Rank decreased at {}", marketcap);
            previous_rank = rank;
            marketcap = marketcap * 3 / 2 + 1;
        }

        assert_eq!(previous_rank, MarketcapCategory::Mega.rank());
    }

    #[test]
    fn test_categorize_marketcaps_is_elementwise() {
        let marketcaps = [250_000_000_000, 0, 2_000_000_000, 49_999_999];

        let categories = categorize_marketcaps(&marketcaps);

        assert_eq!(
            categories,
            vec![
                MarketcapCategory::Mega,
                MarketcapCategory::Nano,
                MarketcapCategory::Mid,
                MarketcapCategory::Nano
            ]
        );
        for (marketcap, category) in marketcaps.iter().zip(categories) {
            assert_eq!(MarketcapCategory::from(*marketcap), category);
        }
        assert!(categorize_marketcaps(&[]).is_empty());
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = MarketcapCategory::ALL
            .iter()
            .map(|category| category.to_string())
            .collect();

        assert_eq!(labels, vec!["Nano", "Micro", "Small", "Mid", "Large", "Mega"]);

        for category in MarketcapCategory::ALL {
            assert_eq!(category.as_str().parse::<MarketcapCategory>().unwrap(), category);
        }
        assert_eq!("mega".parse::<MarketcapCategory>().unwrap(), MarketcapCategory::Mega);
        assert!("Giant".parse::<MarketcapCategory>().is_err());
    }

    #[test]
    fn test_rank_follows_size() {
        for (rank, category) in MarketcapCategory::ALL.iter().enumerate() {
            assert_eq!(category.rank(), rank);
        }
        assert!(MarketcapCategory::Nano < MarketcapCategory::Mega);
    }
}

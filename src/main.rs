use log::{error, info};
use std::io::{self, Read};
use stocks_lexicon::{load_lexicon, Year};

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let data_directory = match args.next() {
        Some(data_directory) => data_directory,
        None => {
            eprintln!("Usage: stocks-lexicon-cli <data-dir> [year] < text.txt");
            std::process::exit(2);
        }
    };

    let lexicon = match load_lexicon(&data_directory) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            error!("Failed to load lexicon from {}: {}", data_directory, e);
            std::process::exit(1);
        }
    };
    info!("{}", lexicon);

    let year: Year = match args.next().map(|year| year.parse()) {
        None => lexicon.default_year(),
        Some(Ok(year)) => year,
        Some(Err(e)) => {
            error!("Invalid year: {}", e);
            std::process::exit(2);
        }
    };

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let name_match = match lexicon.find_name_in_text(&input) {
        Some(name_match) => name_match,
        None => {
            println!("No company name found");
            return;
        }
    };

    match lexicon.generalize_ticker(&name_match.ticker_symbol, year) {
        Ok((size, industry)) => {
            println!(
                "{} ({}): {} {}",
                name_match.name, name_match.ticker_symbol, size, industry
            );
        }
        Err(e) => {
            error!("Error generalizing {}: {}", name_match.ticker_symbol, e);
            std::process::exit(1);
        }
    }
}

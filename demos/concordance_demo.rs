//! Walks through the text analysis pipeline on the bundled sample text

use std::path::Path;

use anyhow::Result;
use text_concordance::config::load_config;
use text_concordance::utils::{logging, output_formatter};
use text_concordance::{
    calculate_frequencies, get_adjacent_words, get_concordance, get_top_n_words, read_from_file,
    remove_stop_words, sort_concordance, tokenize, write_to_file, TextAnalyzer,
};

fn main() -> Result<()> {
    // Optional JSON config as the first argument
    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new));
    logging::setup_logging(config.log_level(), config.log_file.as_deref())?;

    let text = read_from_file("tests/test_data.txt")?;
    let tokens = tokenize(&text);

    let filtered = remove_stop_words(&tokens, &["the", "is", "a", "of", "in", "and"]);
    let frequencies = calculate_frequencies(&filtered);
    println!("Top words: {:?}", get_top_n_words(&frequencies, 5));

    let concordance = get_concordance(&tokens, "sodium", 2, 2);
    println!("Concordance: {:?}", concordance);

    let adjacent = get_adjacent_words(&tokens, "sodium", 2, 2);
    println!("Adjacent words: {:?}", adjacent);

    let sorted = sort_concordance(&tokens, "sodium", 2, 2, true);
    println!("Sorted by left context: {:?}", sorted);

    let output_path = std::env::temp_dir().join("concordance_adjacent.txt");
    write_to_file(&output_path, &adjacent)?;
    println!("Adjacent words written to {}", output_path.display());

    let analyzer = TextAnalyzer::new(&config)?;
    let report = analyzer.analyze_text(&text, "sodium", "tests/test_data.txt");
    println!("\n{}", output_formatter::format_report(&report, true));

    Ok(())
}

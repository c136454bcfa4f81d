use csv::Reader;
use galactic_numerals::{interpret_text, NumeralValue};
use std::error::Error;
use std::{fs, path::Path};
pub mod constants;

/// Utility to load (numeral, value) pairs from a CSV file for testing and benchmarking.
pub fn load_numeral_fixtures(
    file_path: &str,
) -> Result<Vec<(String, NumeralValue)>, Box<dyn Error>> {
    let mut fixtures = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let numeral = record[0].trim().to_string();
            let value = record[1].trim().parse::<NumeralValue>()?;
            fixtures.push((numeral, value));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(fixtures)
}

// Helper function to get the expected responses from a session file
pub fn get_expected_responses(file_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:")
                .map(|expected| expected.trim().to_string())
        })
        .collect()
}

/// Replays a session file and returns `(actual, expected)` responses.
///
/// Lines starting with `EXPECTED:` or `COMMENT:` are not fed to the interpreter.
pub fn run_test_for_file(test_file_path: &Path) -> (Vec<String>, Vec<String>) {
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");

    let filtered_text: String = raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n");

    eprintln!("Testing file: {}", test_file_path.display());

    let results = interpret_text(&filtered_text);
    let expected = get_expected_responses(test_file_path);

    (results, expected)
}

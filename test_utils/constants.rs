pub const TEST_SESSION_FILES_DIRECTORY: &str = "tests/test_session_files";

pub const NUMERAL_FIXTURES_CSV_PATH: &str = "tests/test_data_files/numerals.csv";

use std::fs::read_dir;
use test_utils::constants::TEST_SESSION_FILES_DIRECTORY;
use test_utils::run_test_for_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_from_multiple_files() {
        let files = read_dir(TEST_SESSION_FILES_DIRECTORY)
            .expect("Failed to read test session files directory");

        let mut file_count = 0;

        for file in files {
            let file = file.expect("Failed to read file");
            let file_path = file.path();

            if file_path.is_file() {
                let (results, expected) = run_test_for_file(&file_path);

                assert_eq!(
                    results,
                    expected,
                    "{} - Expected: {:?}, but got: {:?}",
                    file_path.display(),
                    expected,
                    results
                );

                file_count += 1;
            }
        }

        assert!(file_count > 0, "No session files found");
    }
}

pub const TEST_DATA_FILES_DIRECTORY: &str = "tests/test_data_files";

pub const TEST_GZIPPED_DATA_FILES_DIRECTORY: &str = "tests/test_data_files/gzipped";

pub const TEST_TEXT_FILES_DIRECTORY: &str = "tests/test_files";

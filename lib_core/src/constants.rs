pub const HOME: &'static str = "HOME";
pub const AWS_SHARED_CREDENTIALS_FILE: &'static str = "AWS_SHARED_CREDENTIALS_FILE";
pub const RUST_LOG: &'static str = "RUST_LOG";

/// Location of the shared credentials file, relative to the home directory.
pub const DEFAULT_CREDENTIALS_PATH: &'static [&'static str] = &[".aws", "credentials"];
pub const CLI_ERROR_BACKTRACE: &'static str = "CLI_ERROR_BACKTRACE";

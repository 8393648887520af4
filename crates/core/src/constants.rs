/// Constants used throughout the typenv codebase
// Error family
pub const ERROR_CODE: &str = "ENV-500";

// Environment mode
pub const MODE_VAR: &str = "NODE_ENV";
pub const PRODUCTION_MODES: &[&str] = &["production", "prod"];
pub const TESTING_MODES: &[&str] = &["test", "testing"];

// Composite shapes
pub const DEFAULT_SEPARATOR: &str = ",";
pub const PAIR_DELIMITER: char = ':';

// Grammar tokens
pub const TRUE_TOKENS: &[&str] = &["true", "1"];
pub const FALSE_TOKENS: &[&str] = &["false", "0"];

// Network grammar limits
pub const MAX_URL_LENGTH: usize = 2083;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_EMAIL_LOCAL_LENGTH: usize = 64;
pub const MAX_DOMAIN_LABEL_LENGTH: usize = 63;
pub const URL_PROTOCOLS: &[&str] = &["http", "https", "ftp"];

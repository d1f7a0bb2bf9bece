/// Configuration constants for the TikHub API
pub mod api {
    /// Default API origin
    pub const DEFAULT_BASE_URL: &str = "https://api.tikhub.io";

    /// Endpoint used to validate a credential
    pub const HEALTH_CHECK: &str = "/api/v1/health/check";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Whole-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Default cap on pages fetched by one aggregation run (0 = unlimited)
    pub const DEFAULT_MAX_PAGES: u32 = 50;

    /// Default query parameter used to pass a pagination cursor
    pub const DEFAULT_CURSOR_FIELD: &str = "cursor";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API key
    pub const API_KEY_ENV_VAR: &str = "TIKHUB_API_KEY";

    /// Environment variable holding the base URL
    pub const BASE_URL_ENV_VAR: &str = "TIKHUB_BASE_URL";
}

/// Configuration constants for stored profiles
pub mod profile {
    /// Directory name under the home directory
    pub const DIR_NAME: &str = ".tikhub";

    /// Profile configuration file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active profile
    pub const ENV_VAR: &str = "TIKHUB_PROFILE";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

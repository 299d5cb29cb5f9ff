//! Environment-driven configuration with safe defaults.
//!
//! A missing or malformed variable falls back to its default (or the sink's
//! "not configured" state); startup never fails on configuration.

use std::env;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";
pub const DEFAULT_SHEET_NAME: &str = "Product Reviews Sentiment Analysis";
pub const DEFAULT_SHEETS_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port.
    pub port: u16,
    /// Path to a service-account credentials file.
    pub credentials_file: String,
    /// Inline service-account credentials blob, preferred over the file.
    pub credentials_json: Option<String>,
    /// Display name of the target spreadsheet.
    pub sheet_name: String,
    /// Email granted writer access when the spreadsheet is created.
    pub share_email: Option<String>,
    /// Upper bound on each Google API call.
    pub sheets_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            credentials_file: env::var("GOOGLE_CREDENTIALS_FILE")
                .unwrap_or_else(|_| DEFAULT_CREDENTIALS_FILE.to_string()),
            credentials_json: env::var("GOOGLE_CREDENTIALS_JSON")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            sheet_name: env::var("GOOGLE_SHEET_NAME")
                .unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string()),
            share_email: env::var("USER_EMAIL").ok().filter(|v| !v.trim().is_empty()),
            sheets_timeout_secs: env::var("SHEETS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SHEETS_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            credentials_file: DEFAULT_CREDENTIALS_FILE.to_string(),
            credentials_json: None,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            share_email: None,
            sheets_timeout_secs: DEFAULT_SHEETS_TIMEOUT_SECS,
        }
    }
}

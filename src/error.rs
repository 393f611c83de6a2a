// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Still redirected to the login page after logging in
    #[error("Invalid username or password")]
    AuthFailure,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error {status} for {url}")]
    Status { status: u16, url: String },

    /// Page layout did not contain what the parser looks for
    #[error("{0} not found on page")]
    MissingElement(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

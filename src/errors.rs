/*!
 * Error types for the textpulse application.
 *
 * This module contains custom error types for the different stages of an
 * analysis run, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

impl ProviderError {
    /// Map an HTTP error status and body onto the matching variant
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status_code {
            401 | 403 => Self::AuthenticationError(message),
            _ => Self::ApiError { status_code, message },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The translation call did not finish in time
    #[error("Translation timed out after {0} seconds")]
    Timeout(u64),

    /// The provider answered but returned no text
    #[error("Provider returned an empty translation")]
    EmptyResponse,

    /// Generation stopped at the token limit, so the text is incomplete
    #[error("Translation was cut off at the {max_tokens} token limit")]
    Truncated {
        max_tokens: u32,
    },
}

/// Errors that can occur while scoring sentiment
#[derive(Error, Debug)]
pub enum SentimentError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The scorer output could not be read as a score
    #[error("Failed to parse sentiment score: {0}")]
    Parse(String),

    /// The scorer produced NaN or infinite values
    #[error("Invalid sentiment score: polarity={polarity}, subjectivity={subjectivity}")]
    InvalidScore {
        polarity: f64,
        subjectivity: f64,
    },
}

/// Errors that abort a single analysis request
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Blank or whitespace-only text was submitted
    #[error("Please provide some text to analyze")]
    EmptyInput,

    /// Uploaded content is not valid UTF-8 text
    #[error("Failed to decode file content as UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Uploaded file has an extension we do not read
    #[error("Unsupported file type: {0} (expected txt, csv or md)")]
    UnsupportedFile(String),

    /// Reading the uploaded file failed
    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    /// Scoring the whole translated text failed
    #[error("Sentiment scoring failed: {0}")]
    Scoring(#[from] SentimentError),
}

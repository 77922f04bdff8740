//! Error handling for the ATS matcher library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("Document extraction error: {0}")]
    Extraction(String),

    #[error("Completion provider error{}: {message}", fmt_status(.status))]
    Provider {
        status: Option<u16>,
        message: String,
    },

    #[error("Completion provider timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Completion provider returned no choices")]
    EmptyResponse,

    #[error("Resume persistence error: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AtsMatcherError>;

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(s) => format!(" (status {})", s),
        None => String::new(),
    }
}

impl AtsMatcherError {
    /// Transient provider failures are safe for a caller to retry.
    pub fn is_transient(&self) -> bool {
        match self {
            AtsMatcherError::ProviderTimeout(_) => true,
            AtsMatcherError::EmptyResponse => true,
            AtsMatcherError::Provider { status, .. } => match status {
                None => true,
                Some(429) => true,
                Some(s) => *s >= 500,
            },
            _ => false,
        }
    }
}

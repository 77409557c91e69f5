use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("{0} did not return an image")]
    NotAnImage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}

impl AssetError {
    /// Transport failures, server errors and rate limiting are worth another
    /// attempt; everything else will fail the same way again.
    pub fn is_retryable(&self) -> bool {
        match self {
            AssetError::Http(_) => true,
            AssetError::Status { status, .. } => *status >= 500 || *status == 429,
            AssetError::NotAnImage(_) | AssetError::Io(_) | AssetError::Manifest(_) => false,
        }
    }
}

impl From<AssetError> for foodplan_shared::Error {
    fn from(value: AssetError) -> Self {
        Self::Server(value.to_string())
    }
}

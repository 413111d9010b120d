#[derive(Debug)]
pub enum TdxServiceError {
    /// Upstream answered with a non-2xx status.
    Upstream { status: u16, body: String },
    Network(reqwest::Error),
    Decode(String),
    Token(String),
    MissingCredentials,
}

impl std::fmt::Display for TdxServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TdxServiceError::Upstream { status, body } => {
                write!(f, "TDX API error {}: {}", status, body)
            }
            TdxServiceError::Network(e) => write!(f, "TDX network error: {}", e),
            TdxServiceError::Decode(e) => write!(f, "Failed to decode TDX response: {}", e),
            TdxServiceError::Token(e) => write!(f, "TDX token error: {}", e),
            TdxServiceError::MissingCredentials => write!(f, "TDX credentials are missing"),
        }
    }
}

impl std::error::Error for TdxServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TdxServiceError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TdxServiceError {
    fn from(err: reqwest::Error) -> Self {
        TdxServiceError::Network(err)
    }
}

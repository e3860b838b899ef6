#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Timeout(String),
    Api(String),
    UnexpectedShape(String),
    Other(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout(msg) => write!(f, "Request timeout: {}", msg),
            ApiError::Api(msg) => write!(f, "API error: {}", msg),
            ApiError::UnexpectedShape(msg) => write!(f, "Unexpected response shape: {}", msg),
            ApiError::Other(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

use thiserror::Error;

/// ghcal error types
#[derive(Error, Debug)]
pub enum GhcalError {
    /// Network, HTTP, or response-decode failure; text shown as-is
    #[error("{0}")]
    Transport(String),

    /// Response parsed but carried no user payload
    #[error("GitHub API returned no data. Check your token/username.")]
    NoData,

    /// GraphQL error list in the payload; first message shown as-is
    #[error("{0}")]
    Api(String),

    /// Invalid invocation (e.g. empty username)
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for ghcal
pub type Result<T> = std::result::Result<T, GhcalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_passes_text_through() {
        let err = GhcalError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_no_data_fixed_message() {
        assert_eq!(
            GhcalError::NoData.to_string(),
            "GitHub API returned no data. Check your token/username."
        );
    }

    #[test]
    fn test_api_passes_message_through() {
        let err = GhcalError::Api("rate limited".into());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_config_error_display() {
        let err = GhcalError::Config("username must not be empty".into());
        assert_eq!(err.to_string(), "config error: username must not be empty");
    }
}

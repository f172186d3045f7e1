//! Failures while retrieving the dataset document.

/// Every way the mount-time fetch can fail.
/// The UI only ever shows the `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// Network or filesystem failure before a body was available.
    #[error("{0}")]
    Transport(String),
    /// The body is not a valid dataset document.
    #[error("{0}")]
    Parse(String),
    /// The fetch task went away without reporting a result.
    #[error("data request ended without a result")]
    Abandoned,
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_embeds_code() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn transport_and_parse_pass_text_through() {
        assert_eq!(
            FetchError::Transport("Failed to fetch".into()).to_string(),
            "Failed to fetch"
        );
        let parse: FetchError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(parse, FetchError::Parse(ref msg) if msg.contains("expected value")));
    }
}

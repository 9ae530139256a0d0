use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("API request failed with status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] ureq::Transport),

    #[error(transparent)]
    Decode(#[from] std::io::Error),
}

/// Turn a failed fetch into the text handed back to the host.
pub fn render_error(err: &FetchError) -> String {
    match err {
        FetchError::MissingApiKey => format!("Error: {err}"),
        _ => format!("Error fetching logs: {err}"),
    }
}

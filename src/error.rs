/// Everything that can go wrong talking to the Hacker News API.
///
/// Both variants propagate unchanged up to `main`, which is the only
/// place allowed to terminate the process.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("request to the Hacker News API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode the Hacker News API response: {0}")]
    Decode(#[from] serde_json::Error),
}

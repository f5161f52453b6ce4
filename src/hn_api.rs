/// Story identifier issued by the Hacker News API. Never minted locally.
pub(crate) type StoryId = u64;

/// A single posted item, as served by `/item/{id}.json`. The remote
/// schema is loosely typed: any field may be missing, so everything
/// defaults to its zero value.
#[allow(dead_code)]
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub(crate) struct Story {
    pub(crate) by: String,
    pub(crate) id: StoryId,
    pub(crate) kids: Vec<StoryId>,
    pub(crate) score: i64,
    pub(crate) time: u64,
    pub(crate) title: String,
    pub(crate) url: String,
}

#[derive(Debug, Clone)]
pub(crate) struct HnClient {
    http: reqwest::Client,
    base_url: String,
}

impl HnClient {
    /// The base URL is a constructor argument so tests can point the
    /// client at a local mock server.
    pub(crate) fn new(base_url: &str) -> Result<Self, crate::error::Error> {
        let http = reqwest::Client::builder()
            .timeout(crate::config::config().http_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the ranked list of top story ids, order preserved verbatim.
    pub(crate) async fn get_top_stories(&self) -> Result<Vec<StoryId>, crate::error::Error> {
        let url = format!("{}/topstories.json", self.base_url);
        let body = crate::fetch::get_bytes(&self.http, &url).await?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a single story. The API answers `null` for ids it does
    /// not know, which decodes to the all-defaults `Story`.
    pub(crate) async fn get_story(&self, id: StoryId) -> Result<Story, crate::error::Error> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        let body = crate::fetch::get_bytes(&self.http, &url).await?;
        let story: Option<Story> = serde_json::from_slice(&body)?;

        Ok(story.unwrap_or_default())
    }
}

pub(crate) const DEFAULT_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) api_base_url: String,
    pub(crate) http_timeout: std::time::Duration,
}

pub(crate) static CONFIG: std::sync::LazyLock<Config> = std::sync::LazyLock::new(|| {
    dotenvy::dotenv().ok();

    Config {
        api_base_url: std::env::var("HN_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        http_timeout: std::time::Duration::from_secs(
            std::env::var("HN_HTTP_TIMEOUT_SECS")
                .map(|secs| {
                    secs.parse()
                        .expect("HN_HTTP_TIMEOUT_SECS to be a number of seconds")
                })
                .unwrap_or(30),
        ),
    }
});

pub(crate) fn config() -> &'static Config {
    &CONFIG
}

use serde::Deserialize;
use url::Url;

const GITHUB_API: &str = "https://api.github.com/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Root of the GitHub REST API. Point this at a GitHub Enterprise instance (e.g.
    /// `https://github.example.com/api/v3/`) to query it instead of github.com.
    pub api_base_url: Url,
    /// Value of the `User-Agent` header, which GitHub requires on every request.
    pub user_agent: String,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(GITHUB_API).expect("hardcoded URL is valid"),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

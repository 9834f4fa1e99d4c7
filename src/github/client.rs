use anyhow::{anyhow, Context};
use reqwest::StatusCode;
use tracing::{debug, trace};
use url::Url;

use crate::{config::ActivityConfig, github::Event};

pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    /// Creates a new [`GitHubClient`] talking to the API configured in [`ActivityConfig`].
    ///
    /// Requests are anonymous, the only header sent is the configured `User-Agent`, which GitHub
    /// requires.
    pub fn new(config: &ActivityConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("couldn't build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// URL of the public activity feed of `username`.
    pub fn events_url(&self, username: &str) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("{} can't be used as an API base URL", self.base_url))?
            .pop_if_empty()
            .extend(&["users", username, "events"]);

        Ok(url)
    }

    /// Fetches the first page of `username`'s recent events.
    ///
    /// Returns `None` whenever the API doesn't answer with `200 OK`: an unknown user, a rate limit
    /// or a server error all look the same to the caller. Failing to reach the API at all, or
    /// getting a body that isn't a list of events, is an error.
    pub async fn user_events(&self, username: &str) -> anyhow::Result<Option<Vec<Event>>> {
        let url = self.events_url(username)?;
        debug!("fetching events from {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("{} answered with status {}, no events to show", url, status);
            return Ok(None);
        }

        let events: Vec<Event> = response
            .json()
            .await
            .with_context(|| format!("couldn't decode events returned by {}", url))?;
        trace!("received {} events", events.len());

        Ok(Some(events))
    }
}

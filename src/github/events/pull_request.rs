use serde::Deserialize;

use crate::github::events::lenient;

#[derive(Debug, Default, Deserialize)]
pub struct PullRequestPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    // absent from the payload of most actions other than `closed`
    #[serde(default, deserialize_with = "lenient")]
    pub merged: Option<bool>,
}
